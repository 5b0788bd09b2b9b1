use super::*;

/// Tests adding a note to an enquiry.
///
/// Expected: Ok with the note linked to the enquiry
#[tokio::test]
async fn adds_note_to_enquiry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enquiry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let enquiry = factory::create_enquiry(db).await?;

    let repo = EnquiryRepository::new(db);
    let note = repo
        .add_note(CreateEnquiryNoteParam {
            enquiry_id: enquiry.id,
            content: "Booked a trial class".to_string(),
            author: "Admin".to_string(),
        })
        .await?;

    assert_eq!(note.enquiry_id, enquiry.id);
    assert_eq!(note.content, "Booked a trial class");
    assert_eq!(note.author, "Admin");

    let found = repo.get_by_id(enquiry.id).await?.unwrap();
    assert_eq!(found.notes.len(), 1);
    assert_eq!(found.notes[0].id, note.id);

    Ok(())
}

/// Tests adding a note to an enquiry that does not exist.
///
/// Verifies that the foreign key rejects the orphaned note.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_nonexistent_enquiry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enquiry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EnquiryRepository::new(db);
    let result = repo
        .add_note(CreateEnquiryNoteParam {
            enquiry_id: 999,
            content: "Nobody here".to_string(),
            author: "Admin".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
