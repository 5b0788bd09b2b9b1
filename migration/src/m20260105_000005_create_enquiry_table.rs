use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enquiry::Table)
                    .if_not_exists()
                    .col(pk_auto(Enquiry::Id))
                    .col(string(Enquiry::FirstName))
                    .col(string(Enquiry::LastName))
                    .col(string(Enquiry::Email))
                    .col(string_null(Enquiry::Phone))
                    .col(string(Enquiry::EnquiryType))
                    .col(text(Enquiry::Message))
                    .col(string(Enquiry::Status).default("new"))
                    .col(timestamp_with_time_zone(Enquiry::CreatedAt))
                    .col(timestamp_with_time_zone(Enquiry::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enquiry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Enquiry {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    EnquiryType,
    Message,
    Status,
    CreatedAt,
    UpdatedAt,
}
