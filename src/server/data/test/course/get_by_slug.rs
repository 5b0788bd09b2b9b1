use super::*;

/// Tests retrieving a course by slug.
///
/// Expected: Ok(Some) for a known slug, Ok(None) otherwise
#[tokio::test]
async fn finds_course_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::CourseFactory::new(db)
        .slug("mental-maths")
        .build()
        .await?;

    let repo = CourseRepository::new(db);

    let found = repo.get_by_slug("mental-maths").await?;
    assert_eq!(found.map(|c| c.id), Some(course.id));

    let missing = repo.get_by_slug("unknown").await?;
    assert!(missing.is_none());

    Ok(())
}
