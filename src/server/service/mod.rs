//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation rules such as testimonial ratings and module ownership
//! - **Orchestration**: Coordinating repository calls and mapping "absent" to `Option`
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod audit;
pub mod course;
pub mod enquiry;
pub mod franchise;
pub mod media;
pub mod page;
pub mod testimonial;
