use super::*;

/// Tests deleting a course.
///
/// Verifies that the course and its modules are removed.
///
/// Expected: Ok with course and modules gone
#[tokio::test]
async fn deletes_course_and_modules() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    factory::create_course_module(db, course.id, 0).await?;

    let repo = CourseRepository::new(db);
    repo.delete(course.id).await?;

    assert!(repo.get_by_id(course.id).await?.is_none());

    let modules = entity::prelude::CourseModule::find()
        .filter(entity::course_module::Column::CourseId.eq(course.id))
        .count(db)
        .await?;
    assert_eq!(modules, 0);

    Ok(())
}

/// Tests deleting the same course twice.
///
/// Expected: second call returns Err(RecordNotFound)
#[tokio::test]
async fn second_delete_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;

    let repo = CourseRepository::new(db);
    repo.delete(course.id).await?;
    let result = repo.delete(course.id).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
