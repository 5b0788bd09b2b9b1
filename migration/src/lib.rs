pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_cms_page_table;
mod m20260105_000002_create_cms_page_section_table;
mod m20260105_000003_create_course_table;
mod m20260105_000004_create_course_module_table;
mod m20260105_000005_create_enquiry_table;
mod m20260105_000006_create_enquiry_note_table;
mod m20260105_000007_create_franchise_application_table;
mod m20260105_000008_create_franchise_note_table;
mod m20260105_000009_create_media_asset_table;
mod m20260105_000010_create_testimonial_table;
mod m20260112_000011_create_audit_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_cms_page_table::Migration),
            Box::new(m20260105_000002_create_cms_page_section_table::Migration),
            Box::new(m20260105_000003_create_course_table::Migration),
            Box::new(m20260105_000004_create_course_module_table::Migration),
            Box::new(m20260105_000005_create_enquiry_table::Migration),
            Box::new(m20260105_000006_create_enquiry_note_table::Migration),
            Box::new(m20260105_000007_create_franchise_application_table::Migration),
            Box::new(m20260105_000008_create_franchise_note_table::Migration),
            Box::new(m20260105_000009_create_media_asset_table::Migration),
            Box::new(m20260105_000010_create_testimonial_table::Migration),
            Box::new(m20260112_000011_create_audit_log_table::Migration),
        ]
    }
}
