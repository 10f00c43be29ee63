use super::*;

/// Tests storing and reading back the Discord identity.
///
/// Verifies that the profile, including fields the dashboard does not type,
/// and the guild list survive the session round trip.
///
/// Expected: Ok(Some(identity)) equal to what was stored
#[tokio::test]
async fn stores_and_returns_identity() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth = AuthSession::new(session);
    let stored = identity("123456789");
    auth.set_identity(&stored).await.unwrap();

    let loaded = auth.get_identity().await.unwrap();

    assert_eq!(loaded, Some(stored));
}

/// Tests reading an empty session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_login() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth = AuthSession::new(session);

    assert!(auth.get_identity().await.unwrap().is_none());
}

/// Tests that a later login replaces the stored identity.
///
/// Expected: Ok(Some(identity)) of the second user
#[tokio::test]
async fn later_login_replaces_identity() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth = AuthSession::new(session);
    auth.set_identity(&identity("1")).await.unwrap();
    auth.set_identity(&identity("2")).await.unwrap();

    let loaded = auth.get_identity().await.unwrap().unwrap();

    assert_eq!(loaded.user.id, "2");
}

/// Tests clearing the session on logout.
///
/// Expected: identity and any flow state are gone
#[tokio::test]
async fn clear_removes_everything() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth = AuthSession::new(session);
    auth.set_identity(&identity("1")).await.unwrap();
    CsrfSession::new(session)
        .set_token("token".to_string())
        .await
        .unwrap();

    auth.clear().await.unwrap();

    assert!(auth.get_identity().await.unwrap().is_none());
    assert!(CsrfSession::new(session).take_token().await.unwrap().is_none());
}
