//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly through SeaORM active
//! models, bypassing the application's repositories, so tests can arrange state without
//! depending on the code under test.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let enquiry = factory::create_enquiry(&db).await?;
//!     let course = factory::create_course(&db).await?;
//!
//!     // Owned children
//!     let module = factory::create_course_module(&db, course.id, 0).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let asset = factory::media_asset::MediaAssetFactory::new(&db)
//!     .gallery(2024)
//!     .order_index(3)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `cms_page` - Create pages and page sections
//! - `course` - Create courses and course modules
//! - `enquiry` - Create enquiries and enquiry notes
//! - `franchise_application` - Create franchise applications and notes
//! - `media_asset` - Create media assets
//! - `testimonial` - Create testimonials
//! - `helpers` - Shared unique-id counter

pub mod cms_page;
pub mod course;
pub mod enquiry;
pub mod franchise_application;
pub mod helpers;
pub mod media_asset;
pub mod testimonial;

// Re-export commonly used factory functions for concise usage
pub use cms_page::{create_page, create_page_section};
pub use course::{create_course, create_course_module};
pub use enquiry::{create_enquiry, create_enquiry_note};
pub use franchise_application::{create_application, create_franchise_note};
pub use media_asset::create_media_asset;
pub use testimonial::create_testimonial;
