use super::*;

/// Tests listing applications newest first with notes attached.
///
/// Expected: Ok with newest application first
#[tokio::test]
async fn returns_newest_first_with_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_franchise_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::create_application(db).await?;
    let newer = factory::create_application(db).await?;
    factory::create_franchise_note(db, newer.id, "Shortlisted").await?;

    let repo = ApplicationRepository::new(db);
    let applications = repo.get_all().await?;

    assert_eq!(applications.len(), 2);
    assert_eq!(applications[0].id, newer.id);
    assert_eq!(applications[0].notes.len(), 1);
    assert_eq!(applications[1].id, older.id);
    assert!(applications[1].notes.is_empty());

    Ok(())
}
