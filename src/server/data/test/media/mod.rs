use crate::{
    model::media::AssetType,
    server::{
        data::media::MediaAssetRepository,
        model::media::{CreateMediaAssetParam, UpdateMediaAssetParam},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_gallery;
mod update;
