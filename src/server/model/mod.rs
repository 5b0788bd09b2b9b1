//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! CMS records and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod audit;
pub mod course;
pub mod enquiry;
pub mod franchise;
pub mod media;
pub mod page;
pub mod testimonial;

use sea_orm::DbErr;
use std::str::FromStr;

/// Parses a closed-set value stored as text, such as a status column.
///
/// A value outside the set means the row was written by something other than this
/// service and is reported as `DbErr::Custom`.
pub(crate) fn parse_stored<T>(value: &str) -> Result<T, DbErr>
where
    T: FromStr<Err = String>,
{
    value.parse().map_err(DbErr::Custom)
}
