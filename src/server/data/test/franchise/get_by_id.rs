use super::*;

/// Tests retrieving an application by ID.
///
/// Expected: Ok(Some) for a known ID, Ok(None) otherwise
#[tokio::test]
async fn finds_application_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_franchise_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let application = factory::franchise_application::ApplicationFactory::new(db)
        .location("Perth")
        .build()
        .await?;

    let repo = ApplicationRepository::new(db);

    let found = repo.get_by_id(application.id).await?.unwrap();
    assert_eq!(found.location, "Perth");

    assert!(repo.get_by_id(999).await?.is_none());

    Ok(())
}
