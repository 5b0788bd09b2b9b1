//! SeaORM entity definitions for the CMS schema.
//!
//! Tables mirror the migrations in the `migration` crate. Child tables (page
//! sections, course modules, notes) declare their owner with an
//! `ON DELETE CASCADE` relation so deleting an owner never leaves orphans.

pub mod prelude;

pub mod audit_log;
pub mod cms_page;
pub mod cms_page_section;
pub mod course;
pub mod course_module;
pub mod enquiry;
pub mod enquiry_note;
pub mod franchise_application;
pub mod franchise_note;
pub mod media_asset;
pub mod testimonial;
