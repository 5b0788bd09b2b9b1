//! Page factory for creating test pages and their sections.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test pages with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let page = PageFactory::new(&db).slug("about-us").title("About Us").build().await?;
/// ```
pub struct PageFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    title: String,
}

impl<'a> PageFactory<'a> {
    /// Creates a new PageFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"page-{id}"`
    /// - title: `"Page {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("page-{}", id),
            title: format!("Page {}", id),
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

    /// Builds and inserts the page entity into the database.
    pub async fn build(self) -> Result<entity::cms_page::Model, DbErr> {
        let now = Utc::now();
        entity::cms_page::ActiveModel {
            id: ActiveValue::NotSet,
            slug: ActiveValue::Set(self.slug),
            title: ActiveValue::Set(self.title),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a page with default values.
pub async fn create_page(db: &DatabaseConnection) -> Result<entity::cms_page::Model, DbErr> {
    PageFactory::new(db).build().await
}

/// Creates a text section for a page at the given position.
///
/// # Arguments
/// - `db` - Database connection
/// - `page_id` - Owning page ID
/// - `order_index` - Position of the section within the page
pub async fn create_page_section(
    db: &DatabaseConnection,
    page_id: i32,
    order_index: i32,
) -> Result<entity::cms_page_section::Model, DbErr> {
    entity::cms_page_section::ActiveModel {
        id: ActiveValue::NotSet,
        page_id: ActiveValue::Set(page_id),
        section_type: ActiveValue::Set("text".to_string()),
        title: ActiveValue::Set(Some(format!("Section {}", next_id()))),
        content: ActiveValue::Set(serde_json::json!({ "body": "Lorem ipsum" })),
        order_index: ActiveValue::Set(order_index),
    }
    .insert(db)
    .await
}
