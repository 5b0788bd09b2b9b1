//! Database repository layer for all CMS entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity family. Repositories use SeaORM entity models internally and return domain
//! models to keep the data layer separate from the service layer. Owned child rows
//! (page sections, course modules, notes) are loaded in one query per collection and
//! grouped by owner.

pub mod audit;
pub mod course;
pub mod enquiry;
pub mod franchise;
pub mod media;
pub mod page;
pub mod testimonial;

#[cfg(test)]
mod test;
