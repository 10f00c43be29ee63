use super::*;

/// Tests reading what the AI remembers about a user.
///
/// Verifies that every stored memory column is returned unchanged.
///
/// Expected: Ok(Some(UserMemory)) with matching fields
#[tokio::test]
async fn finds_existing_memory() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserMemory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserMemoryFactory::new(db)
        .user_id(7)
        .username("neo")
        .vibe(Some("focused"))
        .summary("Builds bots at night.")
        .last_updated("2026-01-01 10:00:00")
        .build()
        .await?;

    let repo = UserMemoryRepository::new(db);
    let memory = repo.find_by_user_id(7).await?.unwrap();

    assert_eq!(memory.user_id, 7);
    assert_eq!(memory.username.as_deref(), Some("neo"));
    assert_eq!(memory.vibe.as_deref(), Some("focused"));
    assert_eq!(memory.summary.as_deref(), Some("Builds bots at night."));
    assert_eq!(memory.last_updated.as_deref(), Some("2026-01-01 10:00:00"));

    Ok(())
}

/// Tests looking up a user the AI never reflected on.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserMemory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserMemoryRepository::new(db);

    assert!(repo.find_by_user_id(7).await?.is_none());

    Ok(())
}
