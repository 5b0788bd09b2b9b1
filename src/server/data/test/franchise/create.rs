use super::*;

/// Tests creating a franchise application.
///
/// Expected: Ok with status Pending and no notes
#[tokio::test]
async fn creates_application_with_default_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_franchise_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    let application = repo
        .create(CreateApplicationParam {
            first_name: "Sam".to_string(),
            last_name: "Ng".to_string(),
            email: "sam@example.com".to_string(),
            phone: "0411 222 333".to_string(),
            location: "Melbourne".to_string(),
            investment_amount: "100000+".to_string(),
            experience: None,
            motivation: Some("Love teaching".to_string()),
            status: ApplicationStatus::default(),
        })
        .await?;

    assert_eq!(application.status, ApplicationStatus::Pending);
    assert_eq!(application.location, "Melbourne");
    assert!(application.experience.is_none());
    assert!(application.notes.is_empty());

    Ok(())
}
