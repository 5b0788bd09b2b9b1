use super::*;

/// Tests approving and featuring a testimonial.
///
/// Expected: Ok with status Approved and featured set
#[tokio::test]
async fn updates_status_and_featured() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Testimonial)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let testimonial = factory::create_testimonial(db).await?;

    let repo = TestimonialRepository::new(db);
    let updated = repo
        .update(UpdateTestimonialParam {
            id: testimonial.id,
            featured: Some(true),
            status: Some(TestimonialStatus::Approved),
            ..Default::default()
        })
        .await?;

    assert!(updated.featured);
    assert_eq!(updated.status, TestimonialStatus::Approved);
    assert_eq!(updated.content, testimonial.content);

    Ok(())
}

/// Tests updating a testimonial that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_testimonial() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Testimonial)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TestimonialRepository::new(db);
    let result = repo
        .update(UpdateTestimonialParam {
            id: 999,
            rating: Some(5),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
