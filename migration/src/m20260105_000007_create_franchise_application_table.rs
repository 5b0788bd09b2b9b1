use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FranchiseApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(FranchiseApplication::Id))
                    .col(string(FranchiseApplication::FirstName))
                    .col(string(FranchiseApplication::LastName))
                    .col(string(FranchiseApplication::Email))
                    .col(string(FranchiseApplication::Phone))
                    .col(string(FranchiseApplication::Location))
                    .col(string(FranchiseApplication::InvestmentAmount))
                    .col(text_null(FranchiseApplication::Experience))
                    .col(text_null(FranchiseApplication::Motivation))
                    .col(string(FranchiseApplication::Status).default("pending"))
                    .col(timestamp_with_time_zone(FranchiseApplication::CreatedAt))
                    .col(timestamp_with_time_zone(FranchiseApplication::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FranchiseApplication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FranchiseApplication {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Location,
    InvestmentAmount,
    Experience,
    Motivation,
    Status,
    CreatedAt,
    UpdatedAt,
}
