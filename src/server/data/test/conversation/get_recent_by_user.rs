use super::*;

/// Tests fetching a user's latest turns.
///
/// Verifies that only the newest `limit` turns of the requested user are
/// returned, oldest first, so they can be replayed as chat context.
///
/// Expected: Ok(vec) with the last two turns in chronological order
#[tokio::test]
async fn returns_latest_turns_in_chronological_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ConversationHistory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_message(db, 5, "user", "one").await?;
    factory::create_message(db, 5, "model", "two").await?;
    factory::create_message(db, 6, "user", "other user").await?;
    factory::create_message(db, 5, "user", "three").await?;

    let repo = ConversationRepository::new(db);
    let turns = repo.get_recent_by_user(5, 2).await?;

    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role, Role::Model);
    assert_eq!(turns[0].content, "two");
    assert_eq!(turns[1].role, Role::User);
    assert_eq!(turns[1].content, "three");

    Ok(())
}
