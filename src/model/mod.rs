//! API data transfer objects shared by every endpoint.
//!
//! These types define the JSON contract of the REST API. All of them serialize in
//! camelCase to stay compatible with the existing admin dashboard and marketing site.

pub mod api;
pub mod audit;
pub mod course;
pub mod enquiry;
pub mod franchise;
pub mod lenient;
pub mod media;
pub mod page;
pub mod testimonial;
