use super::*;

/// Tests creating an enquiry.
///
/// Verifies that the stored enquiry carries the default status and no notes.
///
/// Expected: Ok with status New and empty notes
#[tokio::test]
async fn creates_enquiry_with_default_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enquiry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EnquiryRepository::new(db);
    let enquiry = repo
        .create(CreateEnquiryParam {
            first_name: "Priya".to_string(),
            last_name: "Shah".to_string(),
            email: "priya@example.com".to_string(),
            phone: Some("0400 123 456".to_string()),
            enquiry_type: "Course".to_string(),
            message: "When does the next term start?".to_string(),
            status: EnquiryStatus::default(),
        })
        .await?;

    assert!(enquiry.id > 0);
    assert_eq!(enquiry.status, EnquiryStatus::New);
    assert!(enquiry.notes.is_empty());
    assert_eq!(enquiry.phone.as_deref(), Some("0400 123 456"));

    let stored = entity::prelude::Enquiry::find_by_id(enquiry.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "new");

    Ok(())
}
