use super::*;
use sea_orm::DbErr;
use test_utils::factory::{self, user_levels::UserLevelsFactory, user_memory::UserMemoryFactory};

use crate::server::test::support::TEST_USER_ID;

/// Tests `/api/me` without a session cookie.
///
/// Expected: 401 {"authenticated": false}
#[tokio::test]
async fn me_without_cookie_is_unauthorized() {
    let app = TestApp::new(TestBuilder::new().with_bot_tables()).await;

    let response = app.get("/api/me", None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({"authenticated": false}));
}

/// Tests `/api/me` with a forged cookie.
///
/// Expected: 401, the signature check drops the cookie
#[tokio::test]
async fn me_with_forged_cookie_is_unauthorized() {
    let app = TestApp::new(TestBuilder::new().with_bot_tables()).await;

    let response = app
        .get("/api/me", Some("prime_session=forged-session-id"))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests `/api/me` after logging in.
///
/// Verifies that the Discord profile is returned as stored, including fields the
/// dashboard does not model, together with the bot's data for the same user.
///
/// Expected: 200 with authenticated = true and the seeded bot data
#[tokio::test]
async fn me_after_login_returns_identity_and_bot_data() -> Result<(), DbErr> {
    let app = TestApp::new(TestBuilder::new().with_bot_tables()).await;
    let user_id: i64 = TEST_USER_ID.parse().unwrap();
    {
        let db = app.test.db.as_ref().unwrap();
        UserLevelsFactory::new(db, user_id).xp(4200).level(12).build().await?;
        UserMemoryFactory::new(db)
            .user_id(user_id)
            .username("neo")
            .vibe(Some("locked in"))
            .summary("Ships on Fridays.")
            .build()
            .await?;
        factory::create_note(db, user_id, "trusted").await?;
    }

    let cookie = app.login().await;
    let response = app.get("/api/me", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["authenticated"], json!(true));
    assert_eq!(body["discord"]["id"], json!(TEST_USER_ID));
    assert_eq!(body["discord"]["locale"], json!("en-US"));
    assert_eq!(body["guilds"][0]["name"], json!("The Grid"));
    assert_eq!(body["internal"]["levels"], json!({"xp": 4200, "level": 12}));
    assert_eq!(body["internal"]["memory"]["vibe"], json!("locked in"));
    assert_eq!(body["internal"]["notes_count"], json!(1));

    Ok(())
}

/// Tests `/api/me` for a user the bot has never seen.
///
/// Expected: memory null, levels zero, notes_count 0
#[tokio::test]
async fn me_for_unknown_user_uses_defaults() {
    let app = TestApp::new(TestBuilder::new().with_bot_tables()).await;

    let cookie = app.login().await;
    let body = body_json(app.get("/api/me", Some(&cookie)).await).await;

    assert_eq!(
        body["internal"],
        json!({"memory": null, "levels": {"xp": 0, "level": 0}, "notes_count": 0})
    );
}

/// Tests that database failures on `/api/me` are reported.
///
/// Expected: 500 {"error": "Internal server error"}
#[tokio::test]
async fn me_reports_database_failure() {
    let app = TestApp::new(TestBuilder::new()).await;

    let cookie = app.login().await;
    let response = app.get("/api/me", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Internal server error"})
    );
}
