use super::*;

/// Tests grouping remembered users by vibe.
///
/// Verifies that users sharing a vibe are counted together and that rows
/// with no vibe are reported under `unknown`.
///
/// Expected: Ok({"chill": 2, "hyped": 1, "unknown": 1})
#[tokio::test]
async fn groups_users_by_vibe() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserMemory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserMemoryFactory::new(db).vibe(Some("chill")).build().await?;
    UserMemoryFactory::new(db).vibe(Some("chill")).build().await?;
    UserMemoryFactory::new(db).vibe(Some("hyped")).build().await?;
    UserMemoryFactory::new(db).vibe(None).build().await?;

    let repo = UserMemoryRepository::new(db);
    let distribution = repo.get_vibe_distribution().await?;

    assert_eq!(distribution.len(), 3);
    assert_eq!(distribution.get("chill"), Some(&2));
    assert_eq!(distribution.get("hyped"), Some(&1));
    assert_eq!(distribution.get("unknown"), Some(&1));

    Ok(())
}

/// Tests the distribution of an empty table.
///
/// Expected: Ok(empty map)
#[tokio::test]
async fn returns_empty_map_when_no_memories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserMemory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserMemoryRepository::new(db);

    assert!(repo.get_vibe_distribution().await?.is_empty());

    Ok(())
}
