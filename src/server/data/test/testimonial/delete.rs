use super::*;

/// Tests deleting a testimonial twice.
///
/// Expected: first call Ok, second Err(RecordNotFound)
#[tokio::test]
async fn deletes_testimonial_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Testimonial)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let testimonial = factory::create_testimonial(db).await?;

    let repo = TestimonialRepository::new(db);
    repo.delete(testimonial.id).await?;

    assert!(repo.get_by_id(testimonial.id).await?.is_none());

    let result = repo.delete(testimonial.id).await;
    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
