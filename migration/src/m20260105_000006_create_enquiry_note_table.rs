use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000005_create_enquiry_table::Enquiry;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EnquiryNote::Table)
                    .if_not_exists()
                    .col(pk_auto(EnquiryNote::Id))
                    .col(integer(EnquiryNote::EnquiryId))
                    .col(text(EnquiryNote::Content))
                    .col(string(EnquiryNote::Author))
                    .col(timestamp_with_time_zone(EnquiryNote::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enquiry_note_enquiry_id")
                            .from(EnquiryNote::Table, EnquiryNote::EnquiryId)
                            .to(Enquiry::Table, Enquiry::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EnquiryNote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EnquiryNote {
    Table,
    Id,
    EnquiryId,
    Content,
    Author,
    CreatedAt,
}
