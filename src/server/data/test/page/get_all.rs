use super::*;

/// Tests listing pages with their sections.
///
/// Verifies that each page carries only its own sections, ordered by `order_index`.
///
/// Expected: Ok with two pages and their sections
#[tokio::test]
async fn returns_pages_with_their_sections() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_page(db).await?;
    let second = factory::create_page(db).await?;
    factory::create_page_section(db, first.id, 2).await?;
    factory::create_page_section(db, first.id, 1).await?;
    factory::create_page_section(db, second.id, 0).await?;

    let repo = PageRepository::new(db);
    let pages = repo.get_all().await?;

    assert_eq!(pages.len(), 2);

    let first_page = pages.iter().find(|p| p.id == first.id).unwrap();
    assert_eq!(first_page.sections.len(), 2);
    assert_eq!(first_page.sections[0].order_index, 1);
    assert_eq!(first_page.sections[1].order_index, 2);

    let second_page = pages.iter().find(|p| p.id == second.id).unwrap();
    assert_eq!(second_page.sections.len(), 1);

    Ok(())
}

/// Tests that the most recently updated page is listed first.
///
/// Expected: Ok with the later page at index 0
#[tokio::test]
async fn orders_by_most_recently_updated() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::create_page(db).await?;
    factory::create_page(db).await?;

    let repo = PageRepository::new(db);
    repo.update(UpdatePageParam {
        id: older.id,
        slug: None,
        title: Some("Touched".to_string()),
        sections: None,
    })
    .await?;

    let pages = repo.get_all().await?;

    assert_eq!(pages[0].id, older.id);

    Ok(())
}

/// Tests listing when no pages exist.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_when_no_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageRepository::new(db);
    let pages = repo.get_all().await?;

    assert!(pages.is_empty());

    Ok(())
}
