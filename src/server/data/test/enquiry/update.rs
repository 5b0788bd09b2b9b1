use super::*;

/// Tests updating an enquiry's status.
///
/// Verifies that only the status changes and existing notes are returned.
///
/// Expected: Ok with status Contacted
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enquiry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let enquiry = factory::create_enquiry(db).await?;
    factory::create_enquiry_note(db, enquiry.id, "Left voicemail").await?;

    let repo = EnquiryRepository::new(db);
    let updated = repo
        .update(UpdateEnquiryParam {
            id: enquiry.id,
            status: Some(EnquiryStatus::Contacted),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.status, EnquiryStatus::Contacted);
    assert_eq!(updated.first_name, enquiry.first_name);
    assert_eq!(updated.notes.len(), 1);

    Ok(())
}

/// Tests updating an enquiry that does not exist.
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
    let result = repo
        .update(UpdateEnquiryParam {
            id: 999,
            status: Some(EnquiryStatus::Closed),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
