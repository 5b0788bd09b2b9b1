//! Franchise application factory for creating test applications and notes.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test franchise applications with customizable fields.
pub struct ApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    location: String,
    status: String,
}

impl<'a> ApplicationFactory<'a> {
    /// Creates a new ApplicationFactory with default values.
    ///
    /// Defaults:
    /// - email: `"applicant{id}@example.com"`
    /// - location: `"Springfield"`
    /// - status: `"pending"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("applicant{}@example.com", id),
            location: "Springfield".to_string(),
            status: "pending".to_string(),
        }
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the application entity into the database.
    pub async fn build(self) -> Result<entity::franchise_application::Model, DbErr> {
        let now = Utc::now();
        entity::franchise_application::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set("Alex".to_string()),
            last_name: ActiveValue::Set("Taylor".to_string()),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set("0400 000 000".to_string()),
            location: ActiveValue::Set(self.location),
            investment_amount: ActiveValue::Set("50000-100000".to_string()),
            experience: ActiveValue::Set(None),
            motivation: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a franchise application with default values.
pub async fn create_application(
    db: &DatabaseConnection,
) -> Result<entity::franchise_application::Model, DbErr> {
    ApplicationFactory::new(db).build().await
}

/// Creates a note on a franchise application.
pub async fn create_franchise_note(
    db: &DatabaseConnection,
    application_id: i32,
    content: impl Into<String>,
) -> Result<entity::franchise_note::Model, DbErr> {
    entity::franchise_note::ActiveModel {
        id: ActiveValue::NotSet,
        application_id: ActiveValue::Set(application_id),
        content: ActiveValue::Set(content.into()),
        author: ActiveValue::Set("Admin".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
