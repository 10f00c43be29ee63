use super::*;

/// Tests the default destination when none was requested.
///
/// Expected: "/"
#[tokio::test]
async fn defaults_to_root() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let flow = OAuthFlowSession::new(session);

    assert_eq!(flow.take_next_url().await.unwrap(), "/");
}

/// Tests storing a same-site destination.
///
/// Verifies the destination is returned once and then falls back to the default.
///
/// Expected: "/dashboard/index.html" then "/"
#[tokio::test]
async fn stores_relative_destination_once() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let flow = OAuthFlowSession::new(session);

    assert!(flow.set_next_url("/dashboard/index.html").await.unwrap());
    assert_eq!(flow.take_next_url().await.unwrap(), "/dashboard/index.html");
    assert_eq!(flow.take_next_url().await.unwrap(), "/");
}

/// Tests that off-site destinations are rejected.
///
/// Expected: Ok(false) for each and the default destination afterwards
#[tokio::test]
async fn rejects_off_site_destinations() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let flow = OAuthFlowSession::new(session);

    for url in ["https://evil.example", "//evil.example", "/\\evil.example", "dashboard"] {
        assert!(!flow.set_next_url(url).await.unwrap(), "accepted {url}");
    }

    assert_eq!(flow.take_next_url().await.unwrap(), "/");
}
