use std::cmp::Ordering;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::media::MediaAssetRepository,
    error::AppError,
    model::media::{CreateMediaAssetParam, GalleryYear, MediaAsset, UpdateMediaAssetParam},
};

pub struct MediaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MediaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, gallery_only: bool) -> Result<Vec<MediaAsset>, AppError> {
        Ok(MediaAssetRepository::new(self.db)
            .get_all(gallery_only)
            .await?)
    }

    /// Gets the public gallery grouped by year
    pub async fn get_gallery(&self) -> Result<Vec<GalleryYear>, AppError> {
        let assets = MediaAssetRepository::new(self.db).get_gallery().await?;

        Ok(group_by_year(assets))
    }

    pub async fn create(&self, param: CreateMediaAssetParam) -> Result<MediaAsset, AppError> {
        Ok(MediaAssetRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, param: UpdateMediaAssetParam) -> Result<MediaAsset, AppError> {
        Ok(MediaAssetRepository::new(self.db).update(param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(MediaAssetRepository::new(self.db).delete(id).await?)
    }
}

/// Groups assets by `gallery_year`.
///
/// Years are ordered newest first with assets lacking a year in a final group; items
/// within a year are ordered by `order_index`, then by ID.
fn group_by_year(mut assets: Vec<MediaAsset>) -> Vec<GalleryYear> {
    assets.sort_by(|a, b| {
        let by_year = match (a.gallery_year, b.gallery_year) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };

        by_year
            .then(a.order_index.cmp(&b.order_index))
            .then(a.id.cmp(&b.id))
    });

    let mut groups: Vec<GalleryYear> = Vec::new();
    for asset in assets {
        match groups.last_mut() {
            Some(group) if group.year == asset.gallery_year => group.items.push(asset),
            _ => groups.push(GalleryYear {
                year: asset.gallery_year,
                items: vec![asset],
            }),
        }
    }

    groups
}
