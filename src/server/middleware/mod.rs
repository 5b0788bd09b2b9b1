//! HTTP middleware applied around the API router.

pub mod cors;
