use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonial::Table)
                    .if_not_exists()
                    .col(pk_auto(Testimonial::Id))
                    .col(string(Testimonial::Name))
                    .col(string(Testimonial::Role))
                    .col(text(Testimonial::Content))
                    .col(integer(Testimonial::Rating).default(5))
                    .col(text_null(Testimonial::Image))
                    .col(boolean(Testimonial::Featured).default(false))
                    .col(string(Testimonial::Status).default("pending"))
                    .col(timestamp_with_time_zone(Testimonial::CreatedAt))
                    .col(timestamp_with_time_zone(Testimonial::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Testimonial::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Testimonial {
    Table,
    Id,
    Name,
    Role,
    Content,
    Rating,
    Image,
    Featured,
    Status,
    CreatedAt,
    UpdatedAt,
}
