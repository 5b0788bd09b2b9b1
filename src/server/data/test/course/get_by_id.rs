use super::*;

/// Tests retrieving a course by ID.
///
/// Expected: Ok(Some) with modules
#[tokio::test]
async fn finds_course_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let module = factory::create_course_module(db, course.id, 0).await?;

    let repo = CourseRepository::new(db);
    let result = repo.get_by_id(course.id).await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.title, course.title);
    assert_eq!(found.modules.len(), 1);
    assert_eq!(found.modules[0].id, module.id);

    Ok(())
}

/// Tests retrieving a course that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let result = repo.get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
