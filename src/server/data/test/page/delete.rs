use super::*;

/// Tests deleting a page.
///
/// Verifies that the page and its sections are removed.
///
/// Expected: Ok with page and sections gone
#[tokio::test]
async fn deletes_page_and_sections() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let page = factory::create_page(db).await?;
    factory::create_page_section(db, page.id, 0).await?;
    factory::create_page_section(db, page.id, 1).await?;

    let repo = PageRepository::new(db);
    repo.delete(page.id).await?;

    assert!(entity::prelude::CmsPage::find_by_id(page.id)
        .one(db)
        .await?
        .is_none());

    let sections = entity::prelude::CmsPageSection::find()
        .filter(entity::cms_page_section::Column::PageId.eq(page.id))
        .count(db)
        .await?;
    assert_eq!(sections, 0);

    Ok(())
}

/// Tests deleting a page that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageRepository::new(db);
    let result = repo.delete(999).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
