use super::*;

/// Tests creating a page with sections.
///
/// Verifies that the repository stores the page and every section, returning the
/// sections ordered by `order_index` regardless of input order.
///
/// Expected: Ok with page and two ordered sections
#[tokio::test]
async fn creates_page_with_sections() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageRepository::new(db);
    let page = repo
        .create(CreatePageParam {
            slug: "about".to_string(),
            title: "About Us".to_string(),
            sections: vec![section("gallery", 1), section("hero", 0)],
        })
        .await?;

    assert_eq!(page.slug, "about");
    assert_eq!(page.title, "About Us");
    assert_eq!(page.sections.len(), 2);
    assert_eq!(page.sections[0].section_type, "hero");
    assert_eq!(page.sections[1].section_type, "gallery");
    assert!(page.sections.iter().all(|s| s.page_id == page.id));

    let stored = entity::prelude::CmsPageSection::find()
        .filter(entity::cms_page_section::Column::PageId.eq(page.id))
        .count(db)
        .await?;
    assert_eq!(stored, 2);

    Ok(())
}

/// Tests creating a page without sections.
///
/// Expected: Ok with an empty section list
#[tokio::test]
async fn creates_page_without_sections() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageRepository::new(db);
    let page = repo
        .create(CreatePageParam {
            slug: "empty".to_string(),
            title: "Empty".to_string(),
            sections: vec![],
        })
        .await?;

    assert!(page.sections.is_empty());

    Ok(())
}

/// Tests that a duplicate slug is rejected.
///
/// Verifies that the unique constraint on slug surfaces as an error and no second page
/// or orphaned section is written.
///
/// Expected: Err, one page and no sections in the database
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::cms_page::PageFactory::new(db)
        .slug("home")
        .build()
        .await?;

    let repo = PageRepository::new(db);
    let result = repo
        .create(CreatePageParam {
            slug: "home".to_string(),
            title: "Home again".to_string(),
            sections: vec![section("hero", 0)],
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::CmsPage::find().count(db).await?, 1);
    assert_eq!(entity::prelude::CmsPageSection::find().count(db).await?, 0);

    Ok(())
}
