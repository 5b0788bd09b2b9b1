use super::*;

/// Tests updating scalar course fields.
///
/// Verifies that provided fields change, omitted fields keep their values and the
/// modules are not touched.
///
/// Expected: Ok with updated fields and unchanged modules
#[tokio::test]
async fn updates_fields_and_keeps_modules() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let module = factory::create_course_module(db, course.id, 0).await?;

    let repo = CourseRepository::new(db);
    let updated = repo
        .update(UpdateCourseParam {
            id: course.id,
            price: Some(79.5),
            status: Some(CourseStatus::Archived),
            features: Some(vec!["Live sessions".to_string()]),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.price, 79.5);
    assert_eq!(updated.status, CourseStatus::Archived);
    assert_eq!(updated.features, vec!["Live sessions"]);
    assert_eq!(updated.title, course.title);
    assert_eq!(updated.modules.len(), 1);
    assert_eq!(updated.modules[0].id, module.id);

    let stored = entity::prelude::Course::find_by_id(course.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "archived");

    Ok(())
}

/// Tests updating a course that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let result = repo
        .update(UpdateCourseParam {
            id: 999,
            title: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
