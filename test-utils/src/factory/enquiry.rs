//! Enquiry factory for creating test enquiries and notes.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test enquiries with customizable fields.
pub struct EnquiryFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    email: String,
    status: String,
}

impl<'a> EnquiryFactory<'a> {
    /// Creates a new EnquiryFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Parent {id}"`
    /// - email: `"parent{id}@example.com"`
    /// - status: `"new"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("Parent {}", id),
            email: format!("parent{}@example.com", id),
            status: "new".to_string(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the enquiry entity into the database.
    pub async fn build(self) -> Result<entity::enquiry::Model, DbErr> {
        let now = Utc::now();
        entity::enquiry::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set("Smith".to_string()),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            enquiry_type: ActiveValue::Set("General".to_string()),
            message: ActiveValue::Set("I would like to know more.".to_string()),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an enquiry with default values.
pub async fn create_enquiry(db: &DatabaseConnection) -> Result<entity::enquiry::Model, DbErr> {
    EnquiryFactory::new(db).build().await
}

/// Creates a note on an enquiry.
pub async fn create_enquiry_note(
    db: &DatabaseConnection,
    enquiry_id: i32,
    content: impl Into<String>,
) -> Result<entity::enquiry_note::Model, DbErr> {
    entity::enquiry_note::ActiveModel {
        id: ActiveValue::NotSet,
        enquiry_id: ActiveValue::Set(enquiry_id),
        content: ActiveValue::Set(content.into()),
        author: ActiveValue::Set("Admin".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
