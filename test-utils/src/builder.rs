use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Enquiry, EnquiryNote};
///
/// let test = TestBuilder::new()
///     .with_table(Enquiry)
///     .with_table(EnquiryNote)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the page table and its owned section table.
    pub fn with_page_tables(self) -> Self {
        self.with_table(CmsPage).with_table(CmsPageSection)
    }

    /// Adds the course table and its owned module table.
    pub fn with_course_tables(self) -> Self {
        self.with_table(Course).with_table(CourseModule)
    }

    /// Adds the enquiry table and its owned note table.
    pub fn with_enquiry_tables(self) -> Self {
        self.with_table(Enquiry).with_table(EnquiryNote)
    }

    /// Adds the franchise application table and its owned note table.
    pub fn with_franchise_tables(self) -> Self {
        self.with_table(FranchiseApplication)
            .with_table(FranchiseNote)
    }

    /// Adds every table in the schema.
    ///
    /// Used by router-level tests that exercise endpoints across all entity families.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new().with_all_tables().build().await?;
    /// ```
    pub fn with_all_tables(self) -> Self {
        self.with_page_tables()
            .with_course_tables()
            .with_enquiry_tables()
            .with_franchise_tables()
            .with_table(MediaAsset)
            .with_table(Testimonial)
            .with_table(AuditLog)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
