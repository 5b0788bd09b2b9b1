use super::*;

/// Tests reconciling a course's modules.
///
/// Verifies that a listed module is updated in place, a module without an ID is inserted,
/// and a stored module missing from the list is deleted.
///
/// Expected: Ok with the updated and inserted modules only
#[tokio::test]
async fn updates_inserts_and_deletes_modules() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let kept = factory::create_course_module(db, course.id, 0).await?;
    let dropped = factory::create_course_module(db, course.id, 1).await?;

    let repo = CourseRepository::new(db);
    let modules = repo
        .reconcile_modules(ReconcileCourseModulesParam {
            course_id: course.id,
            modules: vec![
                reconcile_entry(None, "Speed drills", 0),
                reconcile_entry(Some(kept.id), "Renamed", 1),
            ],
        })
        .await?;

    assert_eq!(modules.len(), 2);
    assert_eq!(modules[0].title, "Speed drills");
    assert_ne!(modules[0].id, kept.id);
    assert_eq!(modules[1].id, kept.id);
    assert_eq!(modules[1].title, "Renamed");
    assert_eq!(modules[1].order_index, 1);

    assert!(entity::prelude::CourseModule::find_by_id(dropped.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests that an empty list removes every module.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn clears_modules_with_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    factory::create_course_module(db, course.id, 0).await?;

    let repo = CourseRepository::new(db);
    let modules = repo
        .reconcile_modules(ReconcileCourseModulesParam {
            course_id: course.id,
            modules: vec![],
        })
        .await?;

    assert!(modules.is_empty());

    Ok(())
}

/// Tests that a module belonging to another course cannot be claimed.
///
/// Verifies that the transaction is rolled back, leaving both courses' modules intact.
///
/// Expected: Err(RecordNotFound) and no changes
#[tokio::test]
async fn rejects_module_from_other_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let other = factory::create_course(db).await?;
    let own = factory::create_course_module(db, course.id, 0).await?;
    let foreign = factory::create_course_module(db, other.id, 0).await?;

    let repo = CourseRepository::new(db);
    let result = repo
        .reconcile_modules(ReconcileCourseModulesParam {
            course_id: course.id,
            modules: vec![reconcile_entry(Some(foreign.id), "Stolen", 0)],
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    let own_exists = entity::prelude::CourseModule::find_by_id(own.id)
        .one(db)
        .await?;
    assert!(own_exists.is_some());

    let foreign_after = entity::prelude::CourseModule::find_by_id(foreign.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(foreign_after.course_id, other.id);
    assert_eq!(foreign_after.title, foreign.title);

    Ok(())
}

/// Tests reconciling modules for a course that does not exist.
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
        .reconcile_modules(ReconcileCourseModulesParam {
            course_id: 999,
            modules: vec![reconcile_entry(None, "Orphan", 0)],
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    assert_eq!(entity::prelude::CourseModule::find().count(db).await?, 0);

    Ok(())
}
