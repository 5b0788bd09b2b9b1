use super::*;

/// Tests moving an application to a new status.
///
/// Expected: Ok with status Approved and other fields unchanged
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_franchise_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let application = factory::create_application(db).await?;

    let repo = ApplicationRepository::new(db);
    let updated = repo
        .update(UpdateApplicationParam {
            id: application.id,
            status: Some(ApplicationStatus::Approved),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.status, ApplicationStatus::Approved);
    assert_eq!(updated.email, application.email);

    Ok(())
}

/// Tests updating an application that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_franchise_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    let result = repo
        .update(UpdateApplicationParam {
            id: 999,
            location: Some("Nowhere".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
