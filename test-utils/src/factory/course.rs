//! Course factory for creating test courses and their modules.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test courses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let course = CourseFactory::new(&db)
///     .slug("beginner-abacus")
///     .status("archived")
///     .build()
///     .await?;
/// ```
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    title: String,
    status: String,
    price: f64,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"course-{id}"`
    /// - title: `"Course {id}"`
    /// - status: `"active"`
    /// - price: `99.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("course-{}", id),
            title: format!("Course {}", id),
            status: "active".to_string(),
            price: 99.0,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        let now = Utc::now();
        entity::course::ActiveModel {
            id: ActiveValue::NotSet,
            slug: ActiveValue::Set(self.slug),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("A structured abacus programme".to_string()),
            short_description: ActiveValue::Set(None),
            category: ActiveValue::Set("Abacus".to_string()),
            level: ActiveValue::Set("Beginner".to_string()),
            duration: ActiveValue::Set("12 weeks".to_string()),
            price: ActiveValue::Set(self.price),
            image: ActiveValue::Set(None),
            instructor: ActiveValue::Set("Instructor".to_string()),
            total_students: ActiveValue::Set(0),
            rating: ActiveValue::Set(0.0),
            features: ActiveValue::Set(serde_json::json!([])),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}

/// Creates a module for a course at the given position.
///
/// # Arguments
/// - `db` - Database connection
/// - `course_id` - Owning course ID
/// - `order_index` - Position of the module within the course
pub async fn create_course_module(
    db: &DatabaseConnection,
    course_id: i32,
    order_index: i32,
) -> Result<entity::course_module::Model, DbErr> {
    entity::course_module::ActiveModel {
        id: ActiveValue::NotSet,
        course_id: ActiveValue::Set(course_id),
        title: ActiveValue::Set(format!("Module {}", next_id())),
        description: ActiveValue::Set(None),
        duration: ActiveValue::Set(None),
        order_index: ActiveValue::Set(order_index),
    }
    .insert(db)
    .await
}
