use super::*;
use test_utils::factory::user_levels::UserLevelsFactory;

/// Tests finding the level row of a user who has earned XP.
///
/// Verifies that the repository returns the stored XP and level for the
/// requested user.
///
/// Expected: Ok(Some(UserLevels { xp: 1500, level: 7 }))
#[tokio::test]
async fn finds_existing_levels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserLevels)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserLevelsFactory::new(db, 42).xp(1500).level(7).build().await?;

    let repo = UserLevelsRepository::new(db);
    let levels = repo.find_by_user_id(42).await?.unwrap();

    assert_eq!(levels.xp, 1500);
    assert_eq!(levels.level, 7);

    Ok(())
}

/// Tests looking up a user without a level row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserLevels)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_levels(db, 1).await?;

    let repo = UserLevelsRepository::new(db);
    let result = repo.find_by_user_id(2).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests querying when the table does not exist.
///
/// Verifies that a missing bot table surfaces as a database error rather
/// than an empty result, so callers can decide how to degrade.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserLevelsRepository::new(db);
    let result = repo.find_by_user_id(1).await;

    assert!(result.is_err());

    Ok(())
}
