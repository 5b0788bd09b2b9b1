use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000007_create_franchise_application_table::FranchiseApplication;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FranchiseNote::Table)
                    .if_not_exists()
                    .col(pk_auto(FranchiseNote::Id))
                    .col(integer(FranchiseNote::ApplicationId))
                    .col(text(FranchiseNote::Content))
                    .col(string(FranchiseNote::Author))
                    .col(timestamp_with_time_zone(FranchiseNote::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_franchise_note_application_id")
                            .from(FranchiseNote::Table, FranchiseNote::ApplicationId)
                            .to(FranchiseApplication::Table, FranchiseApplication::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FranchiseNote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FranchiseNote {
    Table,
    Id,
    ApplicationId,
    Content,
    Author,
    CreatedAt,
}
