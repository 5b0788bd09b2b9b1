use sea_orm::DatabaseConnection;

use crate::server::{
    data::franchise::ApplicationRepository,
    error::AppError,
    model::franchise::{
        Application, CreateApplicationParam, CreateFranchiseNoteParam, FranchiseNote,
        UpdateApplicationParam,
    },
};

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Application>, AppError> {
        Ok(ApplicationRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Application>, AppError> {
        Ok(ApplicationRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn create(&self, param: CreateApplicationParam) -> Result<Application, AppError> {
        Ok(ApplicationRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, param: UpdateApplicationParam) -> Result<Application, AppError> {
        Ok(ApplicationRepository::new(self.db).update(param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(ApplicationRepository::new(self.db).delete(id).await?)
    }

    pub async fn add_note(
        &self,
        param: CreateFranchiseNoteParam,
    ) -> Result<FranchiseNote, AppError> {
        Ok(ApplicationRepository::new(self.db).add_note(param).await?)
    }
}
