use super::*;

/// Tests updating only the title of a page.
///
/// Verifies that omitted fields and existing sections are left untouched.
///
/// Expected: Ok with new title, same slug and sections
#[tokio::test]
async fn updates_title_and_keeps_sections() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let page = factory::create_page(db).await?;
    let section = factory::create_page_section(db, page.id, 0).await?;

    let repo = PageRepository::new(db);
    let updated = repo
        .update(UpdatePageParam {
            id: page.id,
            slug: None,
            title: Some("New Title".to_string()),
            sections: None,
        })
        .await?;

    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.slug, page.slug);
    assert_eq!(updated.sections.len(), 1);
    assert_eq!(updated.sections[0].id, section.id);
    assert!(updated.updated_at >= page.updated_at);

    Ok(())
}

/// Tests replacing a page's sections.
///
/// Verifies that the previous sections are removed and the new list is stored.
///
/// Expected: Ok with only the new sections
#[tokio::test]
async fn replaces_sections() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let page = factory::create_page(db).await?;
    let old = factory::create_page_section(db, page.id, 0).await?;
    factory::create_page_section(db, page.id, 1).await?;

    let repo = PageRepository::new(db);
    let updated = repo
        .update(UpdatePageParam {
            id: page.id,
            slug: None,
            title: None,
            sections: Some(vec![section("cta", 0)]),
        })
        .await?;

    assert_eq!(updated.sections.len(), 1);
    assert_eq!(updated.sections[0].section_type, "cta");

    let old_exists = entity::prelude::CmsPageSection::find_by_id(old.id)
        .one(db)
        .await?;
    assert!(old_exists.is_none());

    Ok(())
}

/// Tests clearing a page's sections with an empty list.
///
/// Expected: Ok with no sections
#[tokio::test]
async fn clears_sections_with_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let page = factory::create_page(db).await?;
    factory::create_page_section(db, page.id, 0).await?;

    let repo = PageRepository::new(db);
    let updated = repo
        .update(UpdatePageParam {
            id: page.id,
            slug: None,
            title: None,
            sections: Some(vec![]),
        })
        .await?;

    assert!(updated.sections.is_empty());

    Ok(())
}

/// Tests updating a page that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageRepository::new(db);
    let result = repo
        .update(UpdatePageParam {
            id: 999,
            slug: None,
            title: Some("Missing".to_string()),
            sections: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
