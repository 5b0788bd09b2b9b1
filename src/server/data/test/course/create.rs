use super::*;

/// Tests creating a course with modules.
///
/// Verifies that the course, its feature list and its modules are stored, with modules
/// returned in `order_index` order.
///
/// Expected: Ok with course and ordered modules
#[tokio::test]
async fn creates_course_with_modules() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let course = repo
        .create(course_param(
            "abacus-101",
            vec![module_param("Counting", 1), module_param("Beads", 0)],
        ))
        .await?;

    assert_eq!(course.slug, "abacus-101");
    assert_eq!(course.status, CourseStatus::Active);
    assert_eq!(course.features, vec!["Workbook", "Certificate"]);
    assert_eq!(course.modules.len(), 2);
    assert_eq!(course.modules[0].title, "Beads");
    assert_eq!(course.modules[1].title, "Counting");
    assert!(course.modules.iter().all(|m| m.course_id == course.id));

    Ok(())
}

/// Tests that a duplicate slug is rejected without writing modules.
///
/// Expected: Err, no modules stored
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::course::CourseFactory::new(db)
        .slug("taken")
        .build()
        .await?;

    let repo = CourseRepository::new(db);
    let result = repo
        .create(course_param("taken", vec![module_param("Intro", 0)]))
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Course::find().count(db).await?, 1);
    assert_eq!(entity::prelude::CourseModule::find().count(db).await?, 0);

    Ok(())
}
