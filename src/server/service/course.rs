use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::course::CourseRepository,
    error::AppError,
    model::course::{Course, CreateCourseParam, ReconcileCourseModulesParam, UpdateCourseParam},
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Course>, AppError> {
        Ok(CourseRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Course>, AppError> {
        Ok(CourseRepository::new(self.db).get_by_slug(slug).await?)
    }

    pub async fn create(&self, param: CreateCourseParam) -> Result<Course, AppError> {
        Ok(CourseRepository::new(self.db).create(param).await?)
    }

    /// Updates scalar fields only; the course's modules are left as stored
    pub async fn update(&self, param: UpdateCourseParam) -> Result<Course, AppError> {
        Ok(CourseRepository::new(self.db).update(param).await?)
    }

    /// Replaces a course's module list, updating, inserting and deleting modules as needed.
    ///
    /// Every `id` in the list must name a module currently stored for this course and may
    /// appear only once.
    ///
    /// # Returns
    /// - `Ok(Course)` - The course with its reconciled modules
    /// - `Err(AppError::NotFound)` - The course does not exist
    /// - `Err(AppError::BadRequest)` - A module id is unknown or repeated
    pub async fn reconcile_modules(
        &self,
        param: ReconcileCourseModulesParam,
    ) -> Result<Course, AppError> {
        let repo = CourseRepository::new(self.db);

        let course_id = param.course_id;
        let course = repo
            .get_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        let stored: HashSet<i32> = course.modules.iter().map(|m| m.id).collect();
        let mut seen = HashSet::new();
        for id in param.modules.iter().filter_map(|m| m.id) {
            if !stored.contains(&id) {
                return Err(AppError::BadRequest(format!(
                    "Module {} does not belong to this course",
                    id
                )));
            }
            if !seen.insert(id) {
                return Err(AppError::BadRequest(format!(
                    "Module {} is listed more than once",
                    id
                )));
            }
        }

        repo.reconcile_modules(param).await?;

        repo.get_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(CourseRepository::new(self.db).delete(id).await?)
    }
}
