//! Media asset domain models and parameters.
//!
//! Assets flagged `is_gallery` also appear in the public gallery, grouped by
//! `gallery_year`.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::media::{AssetType, CreateMediaDto, GalleryYearDto, MediaAssetDto, UpdateMediaDto},
    server::model::parse_stored,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MediaAsset {
    pub id: i32,
    pub name: String,
    pub asset_type: AssetType,
    pub url: String,
    pub size: i64,
    pub uploaded_by: String,
    pub is_gallery: bool,
    pub gallery_year: Option<i32>,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub location: Option<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

impl MediaAsset {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(MediaAsset)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored asset type is not image, video or document
    pub fn from_entity(entity: entity::media_asset::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            asset_type: parse_stored(&entity.asset_type)?,
            url: entity.url,
            size: entity.size,
            uploaded_by: entity.uploaded_by,
            is_gallery: entity.is_gallery,
            gallery_year: entity.gallery_year,
            title: entity.title,
            caption: entity.caption,
            location: entity.location,
            order_index: entity.order_index,
            created_at: entity.created_at,
        })
    }

    /// Converts to the API shape, filling the `type` alias from `asset_type`.
    pub fn into_dto(self) -> MediaAssetDto {
        MediaAssetDto {
            id: self.id,
            name: self.name,
            asset_type: self.asset_type,
            type_alias: self.asset_type,
            url: self.url,
            size: self.size,
            uploaded_by: self.uploaded_by,
            is_gallery: self.is_gallery,
            gallery_year: self.gallery_year,
            title: self.title,
            caption: self.caption,
            location: self.location,
            order_index: self.order_index,
            created_at: self.created_at,
        }
    }
}

/// Gallery assets sharing one `gallery_year`, sorted by `order_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryYear {
    pub year: Option<i32>,
    pub items: Vec<MediaAsset>,
}

impl GalleryYear {
    pub fn into_dto(self) -> GalleryYearDto {
        GalleryYearDto {
            year: self.year,
            items: self.items.into_iter().map(|a| a.into_dto()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMediaAssetParam {
    pub name: String,
    pub asset_type: AssetType,
    pub url: String,
    pub size: i64,
    pub uploaded_by: String,
    pub is_gallery: bool,
    pub gallery_year: Option<i32>,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub location: Option<String>,
    pub order_index: i32,
}

impl CreateMediaAssetParam {
    pub fn from_dto(asset_type: AssetType, dto: CreateMediaDto) -> Self {
        Self {
            name: dto.name,
            asset_type,
            url: dto.url,
            size: dto.size,
            uploaded_by: dto.uploaded_by,
            is_gallery: dto.is_gallery,
            gallery_year: dto.gallery_year,
            title: dto.title,
            caption: dto.caption,
            location: dto.location,
            order_index: dto.order_index,
        }
    }
}

/// Update of the gallery fields of an asset.
///
/// Outer `None` leaves a field untouched; `Some(None)` clears a nullable field.
#[derive(Debug, Clone, Default)]
pub struct UpdateMediaAssetParam {
    pub id: i32,
    pub is_gallery: Option<bool>,
    pub gallery_year: Option<Option<i32>>,
    pub title: Option<Option<String>>,
    pub caption: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub order_index: Option<i32>,
}

impl UpdateMediaAssetParam {
    pub fn from_dto(id: i32, dto: UpdateMediaDto) -> Self {
        Self {
            id,
            is_gallery: dto.is_gallery,
            gallery_year: dto.gallery_year,
            title: dto.title,
            caption: dto.caption,
            location: dto.location,
            order_index: dto.order_index,
        }
    }
}
