use super::*;

/// Tests listing without a status filter.
///
/// Expected: Ok with every testimonial
#[tokio::test]
async fn returns_all_without_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Testimonial)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_testimonial(db).await?;
    factory::testimonial::TestimonialFactory::new(db)
        .status("approved")
        .build()
        .await?;

    let repo = TestimonialRepository::new(db);
    let testimonials = repo.get_all(None).await?;

    assert_eq!(testimonials.len(), 2);

    Ok(())
}

/// Tests filtering by status.
///
/// Expected: Ok with only approved testimonials
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Testimonial)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_testimonial(db).await?;
    let approved = factory::testimonial::TestimonialFactory::new(db)
        .status("approved")
        .build()
        .await?;

    let repo = TestimonialRepository::new(db);
    let testimonials = repo.get_all(Some("approved")).await?;

    assert_eq!(testimonials.len(), 1);
    assert_eq!(testimonials[0].id, approved.id);
    assert_eq!(testimonials[0].status, TestimonialStatus::Approved);

    let none = repo.get_all(Some("unknown")).await?;
    assert!(none.is_empty());

    Ok(())
}
