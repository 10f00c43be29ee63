use super::*;

const RELAY_FAILURE: &str = "System Error: Failed to process neural link.";

/// Tests an empty chat message.
///
/// Expected: 400 {"error": "Message is empty"}
#[tokio::test]
async fn empty_message_is_rejected() {
    let app = TestApp::new(TestBuilder::new()).await;

    let response = app.post_json("/api/chat", r#"{"message": ""}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": "Message is empty"}));
    assert_eq!(app.responder.calls(), 0);
}

/// Tests `!help` through the HTTP layer.
///
/// Expected: 200 with the help text and no responder call
#[tokio::test]
async fn help_is_answered_locally() {
    let app = TestApp::new(TestBuilder::new()).await;

    let response = app.post_json("/api/chat", r#"{"message": "!help"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"response": "Available playground protocols: !vibe, !roast, !help, or just chat naturally with Prime."})
    );
    assert_eq!(app.responder.calls(), 0);
}

/// Tests relaying a normal message with a string user id.
///
/// Expected: 200 with the responder's reply
#[tokio::test]
async fn message_is_relayed() {
    let app = TestApp::new(TestBuilder::new()).await;

    let response = app
        .post_json(
            "/api/chat",
            r#"{"message": "hey prime", "user_id": "123", "username": "neo"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"response": "Prime online."}));
    assert_eq!(app.responder.prompts(), vec!["hey prime".to_string()]);
}

/// Tests a failing AI backend.
///
/// Expected: 500 with the placeholder reply
#[tokio::test]
async fn responder_failure_returns_placeholder() {
    let upstream = MockServer::start().await;
    let config = config(&upstream.uri());
    let app =
        TestApp::with_config(TestBuilder::new(), upstream, config, FakeResponder::failing()).await;

    let response = app.post_json("/api/chat", r#"{"message": "hello"}"#).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({"response": RELAY_FAILURE}));
}

/// Tests a body that is not a chat payload.
///
/// Expected: 500 with the placeholder reply
#[tokio::test]
async fn malformed_body_returns_placeholder() {
    let app = TestApp::new(TestBuilder::new()).await;

    let response = app.post_json("/api/chat", "{not json").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({"response": RELAY_FAILURE}));
    assert_eq!(app.responder.calls(), 0);
}
