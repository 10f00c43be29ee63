use super::*;

/// Tests appending turns to the shared log.
///
/// Verifies that appended turns are stored with their role and are visible
/// to the readers the stats page uses.
///
/// Expected: Ok(()) and counts reflect the new rows
#[tokio::test]
async fn stores_turn_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ConversationHistory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ConversationRepository::new(db);
    repo.append(9, Role::User, "!help").await?;
    repo.append(9, Role::Model, "protocols listed").await?;

    let turns = repo.get_recent_by_user(9, 10).await?;

    assert_eq!(turns.len(), 2);
    assert_eq!(repo.count_commands().await?, 1);
    assert_eq!(repo.count_model_replies().await?, 1);

    Ok(())
}
