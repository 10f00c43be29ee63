use super::*;

/// Tests fetching only the requested user's notes.
///
/// Verifies that notes belonging to other users are excluded and that the
/// user's notes come back in insertion order.
///
/// Expected: Ok(vec) with 2 notes
#[tokio::test]
async fn returns_only_notes_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserNotes)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_note(db, 10, "first warning").await?;
    factory::create_note(db, 11, "someone else").await?;
    factory::create_note(db, 10, "second warning").await?;

    let repo = UserNotesRepository::new(db);
    let notes = repo.get_by_user_id(10).await?;

    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].note, "first warning");
    assert_eq!(notes[1].note, "second warning");
    assert!(notes.iter().all(|note| note.user_id == 10));

    Ok(())
}

/// Tests a user without notes.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_user_without_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserNotes)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserNotesRepository::new(db);

    assert!(repo.get_by_user_id(10).await?.is_empty());

    Ok(())
}
