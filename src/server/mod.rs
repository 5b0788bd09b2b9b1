//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation of the CMS API,
//! including endpoints, business logic, data access, and infrastructure. The backend
//! uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Origin allow-list enforcement
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database initialization and application assembly
//! - **Router** (`router`) - Axum route table
//! - **Docs** (`docs`) - OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Middleware** traces the request and checks its `Origin`
//! 2. **Router** dispatches to the matching controller
//! 3. **Controller** converts the DTO to params and calls the service
//! 4. **Service** applies business rules and calls repositories
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
mod test;
