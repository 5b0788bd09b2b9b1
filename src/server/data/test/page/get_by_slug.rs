use super::*;

/// Tests retrieving a page by slug.
///
/// Expected: Ok(Some) with sections ordered by `order_index`
#[tokio::test]
async fn finds_page_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let page = factory::cms_page::PageFactory::new(db)
        .slug("home")
        .title("Home")
        .build()
        .await?;
    factory::create_page_section(db, page.id, 3).await?;
    factory::create_page_section(db, page.id, 0).await?;

    let repo = PageRepository::new(db);
    let result = repo.get_by_slug("home").await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.id, page.id);
    assert_eq!(found.title, "Home");
    assert_eq!(found.sections.len(), 2);
    assert_eq!(found.sections[0].order_index, 0);
    assert_eq!(found.sections[1].order_index, 3);

    Ok(())
}

/// Tests retrieving an unknown slug.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_page(db).await?;

    let repo = PageRepository::new(db);
    let result = repo.get_by_slug("nonexistent").await?;

    assert!(result.is_none());

    Ok(())
}
