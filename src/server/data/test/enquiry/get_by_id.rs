use super::*;

/// Tests retrieving an enquiry with notes in chronological order.
///
/// Expected: Ok(Some) with notes oldest first
#[tokio::test]
async fn finds_enquiry_with_ordered_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enquiry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let enquiry = factory::create_enquiry(db).await?;
    factory::create_enquiry_note(db, enquiry.id, "First").await?;
    factory::create_enquiry_note(db, enquiry.id, "Second").await?;

    let repo = EnquiryRepository::new(db);
    let found = repo.get_by_id(enquiry.id).await?.unwrap();

    assert_eq!(found.notes.len(), 2);
    assert_eq!(found.notes[0].content, "First");
    assert_eq!(found.notes[1].content, "Second");

    Ok(())
}

/// Tests retrieving an enquiry that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_enquiry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enquiry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EnquiryRepository::new(db);
    let result = repo.get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
