use super::*;

/// Tests that a CSRF token can be taken exactly once.
///
/// Expected: Some(token) on first take, None on second
#[tokio::test]
async fn token_is_single_use() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let csrf = CsrfSession::new(session);
    csrf.set_token("abc123".to_string()).await.unwrap();

    assert_eq!(csrf.take_token().await.unwrap().as_deref(), Some("abc123"));
    assert!(csrf.take_token().await.unwrap().is_none());
}
