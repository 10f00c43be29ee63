use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer, SessionStore};

use crate::server::{
    controller::{
        auth::{callback, login, logout},
        chat::chat,
        openapi::get_openapi,
        stats::get_stats,
        user::get_me,
    },
    state::AppState,
};

/// Name of the dashboard session cookie.
pub const SESSION_COOKIE: &str = "prime_session";

/// Sessions expire after two weeks without a request.
const SESSION_INACTIVITY_DAYS: i64 = 14;

/// Site pages served from the static directory under their own name.
const STATIC_PAGES: [&str; 12] = [
    "terms.html",
    "privacy.html",
    "landing.css",
    "logo.png",
    "status.html",
    "playground.html",
    "dmca.html",
    "support.html",
    "roadmap.html",
    "coming-soon.html",
    "sitemap.html",
    "bmr.html",
];

/// Routes of the dashboard backend and the static site.
///
/// # Arguments
/// - `static_dir` - Directory holding the site's pages and the `dashboard`/`assets` trees
pub fn router(static_dir: &Path) -> Router<AppState> {
    let mut router = Router::new()
        .route("/login", get(login))
        .route("/callback", get(callback))
        .route("/logout", get(logout))
        .route("/api/me", get(get_me))
        .route("/api/stats", get(get_stats))
        .route("/api/chat", post(chat))
        .route("/api/openapi.json", get(get_openapi))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/index.html", ServeFile::new(static_dir.join("index.html")));

    for page in STATIC_PAGES {
        router = router.route_service(&format!("/{}", page), ServeFile::new(static_dir.join(page)));
    }

    router
        .nest_service("/dashboard", ServeDir::new(static_dir.join("dashboard")))
        .nest_service("/assets", ServeDir::new(static_dir.join("assets")))
}

/// Builds the complete application: routes, state, sessions, tracing and CORS.
///
/// The session cookie is signed with a key derived from `SESSION_SECRET`. It is not
/// marked `Secure` so the dashboard also works over plain HTTP during development.
///
/// # Arguments
/// - `state` - Shared application state
/// - `session_store` - Store holding session records
pub fn app<S>(state: AppState, session_store: S) -> Router
where
    S: SessionStore + Clone,
{
    let session_layer = SessionManagerLayer::new(session_store)
        .with_name(SESSION_COOKIE)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)))
        .with_signed(state.config.session_key());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router(&state.config.static_dir)
        .with_state(state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
