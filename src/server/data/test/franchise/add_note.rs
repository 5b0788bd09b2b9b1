use super::*;

/// Tests adding a note to an application.
///
/// Expected: Ok with the note returned on the next read
#[tokio::test]
async fn adds_note_to_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_franchise_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let application = factory::create_application(db).await?;

    let repo = ApplicationRepository::new(db);
    let note = repo
        .add_note(CreateFranchiseNoteParam {
            application_id: application.id,
            content: "Sent information pack".to_string(),
            author: "Jordan".to_string(),
        })
        .await?;

    assert_eq!(note.application_id, application.id);
    assert_eq!(note.author, "Jordan");

    let found = repo.get_by_id(application.id).await?.unwrap();
    assert_eq!(found.notes.len(), 1);
    assert_eq!(found.notes[0].content, "Sent information pack");

    Ok(())
}
