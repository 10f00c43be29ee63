use super::*;

/// Tests counting AI replies.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_model_turns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ConversationHistory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_message(db, 1, "user", "hi").await?;
    factory::create_message(db, 1, "model", "hello").await?;
    factory::create_message(db, 2, "model", "sup").await?;

    let repo = ConversationRepository::new(db);

    assert_eq!(repo.count_model_replies().await?, 2);

    Ok(())
}
