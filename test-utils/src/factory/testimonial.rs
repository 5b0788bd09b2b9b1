//! Testimonial factory for creating test testimonials.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test testimonials with customizable fields.
pub struct TestimonialFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    rating: i32,
    featured: bool,
    status: String,
}

impl<'a> TestimonialFactory<'a> {
    /// Creates a new TestimonialFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Parent {id}"`
    /// - rating: `5`
    /// - status: `"pending"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Parent {}", id),
            rating: 5,
            featured: false,
            status: "pending".to_string(),
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the testimonial entity into the database.
    pub async fn build(self) -> Result<entity::testimonial::Model, DbErr> {
        let now = Utc::now();
        entity::testimonial::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            role: ActiveValue::Set("Parent".to_string()),
            content: ActiveValue::Set("My child loves the classes.".to_string()),
            rating: ActiveValue::Set(self.rating),
            image: ActiveValue::Set(None),
            featured: ActiveValue::Set(self.featured),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending testimonial with default values.
pub async fn create_testimonial(
    db: &DatabaseConnection,
) -> Result<entity::testimonial::Model, DbErr> {
    TestimonialFactory::new(db).build().await
}
