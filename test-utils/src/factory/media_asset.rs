//! Media asset factory for creating test uploads and gallery items.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test media assets with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let asset = MediaAssetFactory::new(&db).gallery(2023).order_index(1).build().await?;
/// ```
pub struct MediaAssetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    asset_type: String,
    is_gallery: bool,
    gallery_year: Option<i32>,
    order_index: i32,
}

impl<'a> MediaAssetFactory<'a> {
    /// Creates a new MediaAssetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"asset-{id}.png"`
    /// - asset_type: `"image"`
    /// - not part of the gallery
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("asset-{}.png", id),
            asset_type: "image".to_string(),
            is_gallery: false,
            gallery_year: None,
            order_index: 0,
        }
    }

    pub fn asset_type(mut self, asset_type: impl Into<String>) -> Self {
        self.asset_type = asset_type.into();
        self
    }

    /// Marks the asset as a gallery item for the given year.
    pub fn gallery(mut self, year: i32) -> Self {
        self.is_gallery = true;
        self.gallery_year = Some(year);
        self
    }

    /// Marks the asset as a gallery item without a year.
    pub fn gallery_without_year(mut self) -> Self {
        self.is_gallery = true;
        self.gallery_year = None;
        self
    }

    pub fn order_index(mut self, order_index: i32) -> Self {
        self.order_index = order_index;
        self
    }

    /// Builds and inserts the media asset entity into the database.
    pub async fn build(self) -> Result<entity::media_asset::Model, DbErr> {
        entity::media_asset::ActiveModel {
            id: ActiveValue::NotSet,
            url: ActiveValue::Set(format!("https://cdn.example.com/{}", self.name)),
            name: ActiveValue::Set(self.name),
            asset_type: ActiveValue::Set(self.asset_type),
            size: ActiveValue::Set(1024),
            uploaded_by: ActiveValue::Set("admin".to_string()),
            is_gallery: ActiveValue::Set(self.is_gallery),
            gallery_year: ActiveValue::Set(self.gallery_year),
            title: ActiveValue::Set(None),
            caption: ActiveValue::Set(None),
            location: ActiveValue::Set(None),
            order_index: ActiveValue::Set(self.order_index),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-gallery image asset with default values.
pub async fn create_media_asset(
    db: &DatabaseConnection,
) -> Result<entity::media_asset::Model, DbErr> {
    MediaAssetFactory::new(db).build().await
}
