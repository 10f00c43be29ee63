use super::*;

async fn site_app() -> TestApp {
    let upstream = MockServer::start().await;
    let static_dir = static_site();
    let config = crate::server::test::support::config_with(
        &upstream.uri(),
        &[("STATIC_DIR", static_dir.to_str().unwrap())],
    );

    TestApp::with_config(
        TestBuilder::new(),
        upstream,
        config,
        FakeResponder::replying("unused"),
    )
    .await
}

/// Tests the landing page routes.
///
/// Expected: `/` and `/index.html` both serve index.html
#[tokio::test]
async fn serves_landing_page() {
    let app = site_app().await;

    for uri in ["/", "/index.html"] {
        let response = app.get(uri, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(body_text(response).await, "<h1>Prime</h1>");
    }
}

/// Tests a named page and the mounted directories.
///
/// Expected: files served from the static directory
#[tokio::test]
async fn serves_pages_and_mounts() {
    let app = site_app().await;

    let response = app.get("/status.html", None).await;
    assert_eq!(body_text(response).await, "<h1>Status</h1>");

    let response = app.get("/dashboard/index.html", None).await;
    assert_eq!(body_text(response).await, "<h1>Dashboard</h1>");

    let response = app.get("/assets/app.js", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Tests a page that is listed but missing on disk.
///
/// Expected: 404
#[tokio::test]
async fn missing_page_is_not_found() {
    let app = site_app().await;

    let response = app.get("/roadmap.html", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tests the OpenAPI document.
///
/// Expected: 200 listing the JSON API paths
#[tokio::test]
async fn serves_openapi_document() {
    let app = TestApp::new(TestBuilder::new()).await;

    let body = body_json(app.get("/api/openapi.json", None).await).await;

    for api_path in ["/api/me", "/api/stats", "/api/chat", "/callback"] {
        assert!(body["paths"][api_path].is_object(), "missing {api_path}");
    }
}
