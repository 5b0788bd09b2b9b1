//! Media asset data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

use crate::server::model::media::{CreateMediaAssetParam, MediaAsset, UpdateMediaAssetParam};

/// Repository providing database operations for media assets.
pub struct MediaAssetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MediaAssetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets media assets, newest first.
    ///
    /// # Arguments
    /// - `gallery_only` - Only return assets flagged for the public gallery
    pub async fn get_all(&self, gallery_only: bool) -> Result<Vec<MediaAsset>, DbErr> {
        entity::prelude::MediaAsset::find()
            .apply_if(gallery_only.then_some(true), |query, is_gallery| {
                query.filter(entity::media_asset::Column::IsGallery.eq(is_gallery))
            })
            .order_by_desc(entity::media_asset::Column::CreatedAt)
            .order_by_desc(entity::media_asset::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(MediaAsset::from_entity)
            .collect()
    }

    /// Gets every gallery asset ordered by year (newest first) and then `order_index`.
    pub async fn get_gallery(&self) -> Result<Vec<MediaAsset>, DbErr> {
        entity::prelude::MediaAsset::find()
            .filter(entity::media_asset::Column::IsGallery.eq(true))
            .order_by_desc(entity::media_asset::Column::GalleryYear)
            .order_by_asc(entity::media_asset::Column::OrderIndex)
            .order_by_asc(entity::media_asset::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(MediaAsset::from_entity)
            .collect()
    }

    pub async fn create(&self, param: CreateMediaAssetParam) -> Result<MediaAsset, DbErr> {
        let entity = entity::media_asset::ActiveModel {
            name: ActiveValue::Set(param.name),
            asset_type: ActiveValue::Set(param.asset_type.as_str().to_string()),
            url: ActiveValue::Set(param.url),
            size: ActiveValue::Set(param.size),
            uploaded_by: ActiveValue::Set(param.uploaded_by),
            is_gallery: ActiveValue::Set(param.is_gallery),
            gallery_year: ActiveValue::Set(param.gallery_year),
            title: ActiveValue::Set(param.title),
            caption: ActiveValue::Set(param.caption),
            location: ActiveValue::Set(param.location),
            order_index: ActiveValue::Set(param.order_index),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        MediaAsset::from_entity(entity)
    }

    /// Updates the gallery fields of an asset.
    ///
    /// # Returns
    /// - `Ok(MediaAsset)` - The asset after the update
    /// - `Err(DbErr::RecordNotFound)` - No asset exists with the specified ID
    pub async fn update(&self, param: UpdateMediaAssetParam) -> Result<MediaAsset, DbErr> {
        let asset = entity::prelude::MediaAsset::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Media asset with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::media_asset::ActiveModel = asset.clone().into();
        if let Some(is_gallery) = param.is_gallery {
            active_model.is_gallery = ActiveValue::Set(is_gallery);
        }
        if let Some(gallery_year) = param.gallery_year {
            active_model.gallery_year = ActiveValue::Set(gallery_year);
        }
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(caption) = param.caption {
            active_model.caption = ActiveValue::Set(caption);
        }
        if let Some(location) = param.location {
            active_model.location = ActiveValue::Set(location);
        }
        if let Some(order_index) = param.order_index {
            active_model.order_index = ActiveValue::Set(order_index);
        }

        // Assets have no updated_at column, so an empty update has nothing to write.
        if !active_model.is_changed() {
            return MediaAsset::from_entity(asset);
        }

        let entity = active_model.update(self.db).await?;

        MediaAsset::from_entity(entity)
    }

    /// Deletes an asset.
    ///
    /// # Returns
    /// - `Ok(())` - Asset deleted
    /// - `Err(DbErr::RecordNotFound)` - No asset exists with the specified ID
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let result = entity::prelude::MediaAsset::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "Media asset with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
