use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::stats::StatsDto,
    server::{service::stats::StatsService, state::AppState},
};

pub static STATS_TAG: &str = "stats";

/// GET /api/stats - Public bot statistics
///
/// Always answers 200. Database-derived fields fall back to zero or empty when the bot
/// database cannot answer.
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Bot counts, recent activity and host metrics", body = StatsDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    let stats = StatsService::new(&state.db, &state.metrics)
        .get_stats()
        .await;

    (StatusCode::OK, Json(stats.into_dto()))
}
