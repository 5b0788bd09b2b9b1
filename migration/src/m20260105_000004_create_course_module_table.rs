use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_course_table::Course;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseModule::Table)
                    .if_not_exists()
                    .col(pk_auto(CourseModule::Id))
                    .col(integer(CourseModule::CourseId))
                    .col(string(CourseModule::Title))
                    .col(text_null(CourseModule::Description))
                    .col(string_null(CourseModule::Duration))
                    .col(integer(CourseModule::OrderIndex).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_module_course_id")
                            .from(CourseModule::Table, CourseModule::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseModule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CourseModule {
    Table,
    Id,
    CourseId,
    Title,
    Description,
    Duration,
    OrderIndex,
}
