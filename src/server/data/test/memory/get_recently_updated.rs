use super::*;

/// Tests fetching the newest memories first.
///
/// Verifies that rows are ordered by `last_updated` descending and that the
/// limit is honored.
///
/// Expected: Ok(vec) with the two newest usernames in order
#[tokio::test]
async fn returns_newest_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserMemory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserMemoryFactory::new(db)
        .username("oldest")
        .last_updated("2026-01-01 08:00:00")
        .build()
        .await?;
    UserMemoryFactory::new(db)
        .username("newest")
        .last_updated("2026-01-01 10:00:00")
        .build()
        .await?;
    UserMemoryFactory::new(db)
        .username("middle")
        .last_updated("2026-01-01 09:00:00")
        .build()
        .await?;

    let repo = UserMemoryRepository::new(db);
    let recent = repo.get_recently_updated(2).await?;

    let names: Vec<_> = recent
        .iter()
        .map(|memory| memory.username.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["newest", "middle"]);

    Ok(())
}
