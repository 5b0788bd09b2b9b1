use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string_uniq(Course::Slug))
                    .col(string(Course::Title))
                    .col(text(Course::Description))
                    .col(string_null(Course::ShortDescription))
                    .col(string(Course::Category))
                    .col(string(Course::Level))
                    .col(string(Course::Duration))
                    .col(double(Course::Price).default(0.0))
                    .col(text_null(Course::Image))
                    .col(string(Course::Instructor))
                    .col(integer(Course::TotalStudents).default(0))
                    .col(double(Course::Rating).default(0.0))
                    .col(json(Course::Features))
                    .col(string(Course::Status).default("active"))
                    .col(timestamp_with_time_zone(Course::CreatedAt))
                    .col(timestamp_with_time_zone(Course::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    Slug,
    Title,
    Description,
    ShortDescription,
    Category,
    Level,
    Duration,
    Price,
    Image,
    Instructor,
    TotalStudents,
    Rating,
    Features,
    Status,
    CreatedAt,
    UpdatedAt,
}
