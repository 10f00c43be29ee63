use super::*;
use sea_orm::DbErr;
use test_utils::factory;

/// Tests `/api/stats` when none of the bot tables exist.
///
/// Expected: 200 with zero counts and empty collections
#[tokio::test]
async fn stats_degrade_without_bot_tables() {
    let app = TestApp::new(TestBuilder::new()).await;

    let response = app.get("/api/stats", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total_users"], json!(0));
    assert_eq!(body["total_commands"], json!(0));
    assert_eq!(body["ai_reflections"], json!(0));
    assert_eq!(body["vibe_distribution"], json!({}));
    assert_eq!(body["activities"], json!([]));
    assert_eq!(body["system_status"], json!("ONLINE"));
    assert_eq!(body["process_id"], json!(std::process::id()));
    assert!(body["cpu_load"].is_number());
    assert!(body["ram_usage"].is_number());
    assert!(body["uptime_seconds"].is_u64());
}

/// Tests `/api/stats` with bot data.
///
/// Expected: 200 with counts and activity entries shaped for the status page
#[tokio::test]
async fn stats_report_bot_activity() -> Result<(), DbErr> {
    let app = TestApp::new(TestBuilder::new().with_bot_tables()).await;
    {
        let db = app.test.db.as_ref().unwrap();
        factory::create_user_levels(db, 1).await?;
        factory::create_message(db, 1, "user", "!roast me").await?;
        factory::create_message(db, 1, "model", "gladly").await?;
        factory::create_user_memory(db, 1).await?;
        factory::create_deleted_message(db, "eve", "2026-01-01 00:00:00").await?;
    }

    let body = body_json(app.get("/api/stats", None).await).await;

    assert_eq!(body["total_users"], json!(1));
    assert_eq!(body["total_commands"], json!(1));
    assert_eq!(body["ai_reflections"], json!(1));
    assert_eq!(body["vibe_distribution"], json!({"chill": 1}));
    assert_eq!(body["activities"][0]["type"], json!("AI Reflection"));
    assert_eq!(body["activities"][0]["time"], json!("just now"));
    assert_eq!(body["activities"][1]["type"], json!("Moderation"));

    Ok(())
}
