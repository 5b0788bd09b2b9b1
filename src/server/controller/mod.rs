//! HTTP request handlers.
//!
//! One module per resource. Handlers convert request DTOs into parameters, call the
//! matching service and convert the returned domain model back into a DTO. Failures
//! other than 400/404 are collapsed into the operation's fixed message with
//! `AppError::fail_with`.

pub mod audit;
pub mod course;
pub mod enquiry;
pub mod franchise;
pub mod health;
pub mod media;
pub mod page;
pub mod testimonial;
