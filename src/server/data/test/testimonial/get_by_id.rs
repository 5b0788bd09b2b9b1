use super::*;

/// Tests retrieving a testimonial by ID.
///
/// Expected: Ok(Some) for a known ID, Ok(None) otherwise
#[tokio::test]
async fn finds_testimonial_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Testimonial)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let testimonial = factory::testimonial::TestimonialFactory::new(db)
        .rating(3)
        .build()
        .await?;

    let repo = TestimonialRepository::new(db);

    let found = repo.get_by_id(testimonial.id).await?.unwrap();
    assert_eq!(found.rating, 3);

    assert!(repo.get_by_id(999).await?.is_none());

    Ok(())
}
