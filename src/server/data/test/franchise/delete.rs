use super::*;

/// Tests deleting an application together with its notes.
///
/// Expected: Ok, then Err(RecordNotFound) on a second delete
#[tokio::test]
async fn deletes_application_and_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_franchise_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let application = factory::create_application(db).await?;
    factory::create_franchise_note(db, application.id, "Interview booked").await?;

    let repo = ApplicationRepository::new(db);
    repo.delete(application.id).await?;

    let notes = entity::prelude::FranchiseNote::find()
        .filter(entity::franchise_note::Column::ApplicationId.eq(application.id))
        .count(db)
        .await?;
    assert_eq!(notes, 0);

    let result = repo.delete(application.id).await;
    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
