use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CmsPage::Table)
                    .if_not_exists()
                    .col(pk_auto(CmsPage::Id))
                    .col(string_uniq(CmsPage::Slug))
                    .col(string(CmsPage::Title))
                    .col(timestamp_with_time_zone(CmsPage::CreatedAt))
                    .col(timestamp_with_time_zone(CmsPage::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CmsPage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CmsPage {
    Table,
    Id,
    Slug,
    Title,
    CreatedAt,
    UpdatedAt,
}
