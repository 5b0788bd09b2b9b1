//! Course data repository for database operations.
//!
//! Courses own an ordered list of modules. Module rows are only written when a course
//! is created and through [`CourseRepository::reconcile_modules`]; scalar course updates
//! never touch them.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::course::{
    Course, CourseModule, CreateCourseParam, ReconcileCourseModulesParam, UpdateCourseParam,
};

/// Repository providing database operations for courses and their modules.
pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every course with its modules in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Course>, DbErr> {
        let courses = entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        let course_ids = courses.iter().map(|c| c.id).collect();
        let mut modules = find_modules(self.db, course_ids).await?;

        courses
            .into_iter()
            .map(|course| {
                let course_modules = modules.remove(&course.id).unwrap_or_default();
                Course::from_entity(course, course_modules)
            })
            .collect()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let course = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        self.with_modules(course).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Course>, DbErr> {
        let course = entity::prelude::Course::find()
            .filter(entity::course::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        self.with_modules(course).await
    }

    /// Creates a course together with its modules.
    ///
    /// # Returns
    /// - `Ok(Course)` - The created course with generated IDs and timestamps
    /// - `Err(DbErr)` - Database error, including a duplicate slug; nothing is written
    pub async fn create(&self, param: CreateCourseParam) -> Result<Course, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let course = entity::course::ActiveModel {
            slug: ActiveValue::Set(param.slug),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            short_description: ActiveValue::Set(param.short_description),
            category: ActiveValue::Set(param.category),
            level: ActiveValue::Set(param.level),
            duration: ActiveValue::Set(param.duration),
            price: ActiveValue::Set(param.price),
            image: ActiveValue::Set(param.image),
            instructor: ActiveValue::Set(param.instructor),
            total_students: ActiveValue::Set(param.total_students),
            rating: ActiveValue::Set(param.rating),
            features: ActiveValue::Set(serde_json::Value::from(param.features)),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut modules = Vec::with_capacity(param.modules.len());
        for module in param.modules {
            let entity = entity::course_module::ActiveModel {
                course_id: ActiveValue::Set(course.id),
                title: ActiveValue::Set(module.title),
                description: ActiveValue::Set(module.description),
                duration: ActiveValue::Set(module.duration),
                order_index: ActiveValue::Set(module.order_index),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            modules.push(CourseModule::from_entity(entity));
        }
        modules.sort_by_key(|m| (m.order_index, m.id));

        txn.commit().await?;

        Course::from_entity(course, modules)
    }

    /// Updates a course's scalar fields.
    ///
    /// # Returns
    /// - `Ok(Course)` - The updated course with its unchanged modules
    /// - `Err(DbErr::RecordNotFound)` - No course exists with the specified ID
    pub async fn update(&self, param: UpdateCourseParam) -> Result<Course, DbErr> {
        let course = entity::prelude::Course::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Course with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::course::ActiveModel = course.into();
        if let Some(slug) = param.slug {
            active_model.slug = ActiveValue::Set(slug);
        }
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(short_description) = param.short_description {
            active_model.short_description = ActiveValue::Set(Some(short_description));
        }
        if let Some(category) = param.category {
            active_model.category = ActiveValue::Set(category);
        }
        if let Some(level) = param.level {
            active_model.level = ActiveValue::Set(level);
        }
        if let Some(duration) = param.duration {
            active_model.duration = ActiveValue::Set(duration);
        }
        if let Some(price) = param.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(image) = param.image {
            active_model.image = ActiveValue::Set(Some(image));
        }
        if let Some(instructor) = param.instructor {
            active_model.instructor = ActiveValue::Set(instructor);
        }
        if let Some(total_students) = param.total_students {
            active_model.total_students = ActiveValue::Set(total_students);
        }
        if let Some(rating) = param.rating {
            active_model.rating = ActiveValue::Set(rating);
        }
        if let Some(features) = param.features {
            active_model.features = ActiveValue::Set(serde_json::Value::from(features));
        }
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let course = active_model.update(self.db).await?;

        self.with_modules(Some(course))
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Course with id {} not found",
                param.id
            )))
    }

    /// Brings a course's modules in line with the given list.
    ///
    /// Entries carrying an `id` update that module, entries without one are inserted
    /// and stored modules missing from the list are deleted, all in one transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<CourseModule>)` - The course's modules after reconciliation
    /// - `Err(DbErr::RecordNotFound)` - The course, or a referenced module of this course,
    ///   does not exist; nothing is written
    pub async fn reconcile_modules(
        &self,
        param: ReconcileCourseModulesParam,
    ) -> Result<Vec<CourseModule>, DbErr> {
        let txn = self.db.begin().await?;

        let course = entity::prelude::Course::find_by_id(param.course_id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Course with id {} not found",
                param.course_id
            )))?;

        let keep: HashSet<i32> = param.modules.iter().filter_map(|m| m.id).collect();
        let stale: Vec<i32> = entity::prelude::CourseModule::find()
            .filter(entity::course_module::Column::CourseId.eq(course.id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|m| m.id)
            .filter(|id| !keep.contains(id))
            .collect();

        if !stale.is_empty() {
            entity::prelude::CourseModule::delete_many()
                .filter(entity::course_module::Column::Id.is_in(stale))
                .exec(&txn)
                .await?;
        }

        for module in param.modules {
            match module.id {
                Some(id) => {
                    let existing = entity::prelude::CourseModule::find_by_id(id)
                        .filter(entity::course_module::Column::CourseId.eq(course.id))
                        .one(&txn)
                        .await?
                        .ok_or(DbErr::RecordNotFound(format!(
                            "Module with id {} not found in course {}",
                            id, course.id
                        )))?;

                    let mut active_model: entity::course_module::ActiveModel = existing.into();
                    active_model.title = ActiveValue::Set(module.title);
                    active_model.description = ActiveValue::Set(module.description);
                    active_model.duration = ActiveValue::Set(module.duration);
                    active_model.order_index = ActiveValue::Set(module.order_index);
                    active_model.update(&txn).await?;
                }
                None => {
                    entity::course_module::ActiveModel {
                        course_id: ActiveValue::Set(course.id),
                        title: ActiveValue::Set(module.title),
                        description: ActiveValue::Set(module.description),
                        duration: ActiveValue::Set(module.duration),
                        order_index: ActiveValue::Set(module.order_index),
                        ..Default::default()
                    }
                    .insert(&txn)
                    .await?;
                }
            }
        }

        let mut active_model: entity::course::ActiveModel = course.into();
        active_model.updated_at = ActiveValue::Set(Utc::now());
        let course = active_model.update(&txn).await?;

        let modules = find_modules(&txn, vec![course.id])
            .await?
            .remove(&course.id)
            .unwrap_or_default();

        txn.commit().await?;

        Ok(modules)
    }

    /// Deletes a course; its modules are removed by the cascading foreign key.
    ///
    /// # Returns
    /// - `Ok(())` - Course deleted
    /// - `Err(DbErr::RecordNotFound)` - No course exists with the specified ID
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let result = entity::prelude::Course::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "Course with id {} not found",
                id
            )));
        }

        Ok(())
    }

    async fn with_modules(
        &self,
        course: Option<entity::course::Model>,
    ) -> Result<Option<Course>, DbErr> {
        let Some(course) = course else {
            return Ok(None);
        };

        let modules = find_modules(self.db, vec![course.id])
            .await?
            .remove(&course.id)
            .unwrap_or_default();

        Course::from_entity(course, modules).map(Some)
    }
}

/// Loads the modules of the given courses, grouped by course ID and ordered by `order_index`.
async fn find_modules<C>(
    conn: &C,
    course_ids: Vec<i32>,
) -> Result<HashMap<i32, Vec<CourseModule>>, DbErr>
where
    C: ConnectionTrait,
{
    let mut grouped: HashMap<i32, Vec<CourseModule>> = HashMap::new();
    if course_ids.is_empty() {
        return Ok(grouped);
    }

    let modules = entity::prelude::CourseModule::find()
        .filter(entity::course_module::Column::CourseId.is_in(course_ids))
        .order_by_asc(entity::course_module::Column::OrderIndex)
        .order_by_asc(entity::course_module::Column::Id)
        .all(conn)
        .await?;

    for module in modules {
        grouped
            .entry(module.course_id)
            .or_default()
            .push(CourseModule::from_entity(module));
    }

    Ok(grouped)
}
