use super::*;

/// Tests counting command messages.
///
/// Verifies that only `user` turns whose content starts with `!` are counted.
/// Plain chat and model replies that happen to start with `!` are ignored.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_user_messages_starting_with_bang() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ConversationHistory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_message(db, 1, "user", "!vibe").await?;
    factory::create_message(db, 1, "user", "!roast bob").await?;
    factory::create_message(db, 1, "user", "hello there").await?;
    factory::create_message(db, 1, "model", "!not a command").await?;

    let repo = ConversationRepository::new(db);

    assert_eq!(repo.count_commands().await?, 2);

    Ok(())
}
