use super::*;

/// Tests counting users with level rows.
///
/// Expected: Ok(3)
#[tokio::test]
async fn counts_all_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserLevels)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for user_id in 1..=3 {
        factory::create_user_levels(db, user_id).await?;
    }

    let repo = UserLevelsRepository::new(db);

    assert_eq!(repo.count().await?, 3);

    Ok(())
}

/// Tests counting an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserLevels)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserLevelsRepository::new(db);

    assert_eq!(repo.count().await?, 0);

    Ok(())
}
