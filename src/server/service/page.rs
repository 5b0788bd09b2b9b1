use sea_orm::DatabaseConnection;

use crate::server::{
    data::page::PageRepository,
    error::AppError,
    model::page::{CreatePageParam, Page, UpdatePageParam},
};

pub struct PageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Page>, AppError> {
        Ok(PageRepository::new(self.db).get_all().await?)
    }

    /// Gets a page by slug; returns None if no page has this slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Page>, AppError> {
        Ok(PageRepository::new(self.db).get_by_slug(slug).await?)
    }

    pub async fn create(&self, param: CreatePageParam) -> Result<Page, AppError> {
        Ok(PageRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, param: UpdatePageParam) -> Result<Page, AppError> {
        Ok(PageRepository::new(self.db).update(param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(PageRepository::new(self.db).delete(id).await?)
    }
}
