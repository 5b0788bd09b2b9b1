use super::*;

/// Tests listing enquiries with their notes.
///
/// Verifies newest-first ordering and that notes are attached to the right enquiry.
///
/// Expected: Ok with newest enquiry first
#[tokio::test]
async fn returns_newest_first_with_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enquiry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::create_enquiry(db).await?;
    let newer = factory::create_enquiry(db).await?;
    factory::create_enquiry_note(db, older.id, "Called back").await?;

    let repo = EnquiryRepository::new(db);
    let enquiries = repo.get_all().await?;

    assert_eq!(enquiries.len(), 2);
    assert_eq!(enquiries[0].id, newer.id);
    assert!(enquiries[0].notes.is_empty());
    assert_eq!(enquiries[1].id, older.id);
    assert_eq!(enquiries[1].notes.len(), 1);
    assert_eq!(enquiries[1].notes[0].content, "Called back");

    Ok(())
}
