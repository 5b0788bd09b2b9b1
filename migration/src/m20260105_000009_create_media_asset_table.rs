use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MediaAsset::Table)
                    .if_not_exists()
                    .col(pk_auto(MediaAsset::Id))
                    .col(string(MediaAsset::Name))
                    .col(string(MediaAsset::AssetType))
                    .col(text(MediaAsset::Url))
                    .col(big_integer(MediaAsset::Size).default(0))
                    .col(string(MediaAsset::UploadedBy))
                    .col(boolean(MediaAsset::IsGallery).default(false))
                    .col(integer_null(MediaAsset::GalleryYear))
                    .col(string_null(MediaAsset::Title))
                    .col(text_null(MediaAsset::Caption))
                    .col(string_null(MediaAsset::Location))
                    .col(integer(MediaAsset::OrderIndex).default(0))
                    .col(timestamp_with_time_zone(MediaAsset::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_media_asset_is_gallery")
                    .table(MediaAsset::Table)
                    .col(MediaAsset::IsGallery)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaAsset::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MediaAsset {
    Table,
    Id,
    Name,
    AssetType,
    Url,
    Size,
    UploadedBy,
    IsGallery,
    GalleryYear,
    Title,
    Caption,
    Location,
    OrderIndex,
    CreatedAt,
}
