use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_cms_page_table::CmsPage;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CmsPageSection::Table)
                    .if_not_exists()
                    .col(pk_auto(CmsPageSection::Id))
                    .col(integer(CmsPageSection::PageId))
                    .col(string(CmsPageSection::SectionType))
                    .col(string_null(CmsPageSection::Title))
                    .col(json(CmsPageSection::Content))
                    .col(integer(CmsPageSection::OrderIndex).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cms_page_section_page_id")
                            .from(CmsPageSection::Table, CmsPageSection::PageId)
                            .to(CmsPage::Table, CmsPage::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CmsPageSection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CmsPageSection {
    Table,
    Id,
    PageId,
    SectionType,
    Title,
    Content,
    OrderIndex,
}
