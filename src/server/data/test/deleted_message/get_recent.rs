use super::*;

/// Tests fetching the latest sniped messages.
///
/// Verifies ordering by timestamp descending and the row limit.
///
/// Expected: Ok(vec) with the two newest authors in order
#[tokio::test]
async fn returns_newest_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DeletedMessages)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_deleted_message(db, "alice", "2026-01-01 08:00:00").await?;
    factory::create_deleted_message(db, "carol", "2026-01-01 10:00:00").await?;
    factory::create_deleted_message(db, "bob", "2026-01-01 09:00:00").await?;

    let repo = DeletedMessageRepository::new(db);
    let recent = repo.get_recent(2).await?;

    let names: Vec<_> = recent
        .iter()
        .map(|message| message.username.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["carol", "bob"]);

    Ok(())
}
