use super::*;

/// Tests deleting an enquiry.
///
/// Verifies that the enquiry's notes are removed with it.
///
/// Expected: Ok with enquiry and notes gone
#[tokio::test]
async fn deletes_enquiry_and_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enquiry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let enquiry = factory::create_enquiry(db).await?;
    factory::create_enquiry_note(db, enquiry.id, "Note").await?;

    let repo = EnquiryRepository::new(db);
    repo.delete(enquiry.id).await?;

    assert!(repo.get_by_id(enquiry.id).await?.is_none());

    let notes = entity::prelude::EnquiryNote::find()
        .filter(entity::enquiry_note::Column::EnquiryId.eq(enquiry.id))
        .count(db)
        .await?;
    assert_eq!(notes, 0);

    Ok(())
}

/// Tests deleting an enquiry that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_enquiry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enquiry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EnquiryRepository::new(db);
    let result = repo.delete(999).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
