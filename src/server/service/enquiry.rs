use sea_orm::DatabaseConnection;

use crate::server::{
    data::enquiry::EnquiryRepository,
    error::AppError,
    model::enquiry::{
        CreateEnquiryNoteParam, CreateEnquiryParam, Enquiry, EnquiryNote, UpdateEnquiryParam,
    },
};

pub struct EnquiryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnquiryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Enquiry>, AppError> {
        Ok(EnquiryRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Enquiry>, AppError> {
        Ok(EnquiryRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn create(&self, param: CreateEnquiryParam) -> Result<Enquiry, AppError> {
        Ok(EnquiryRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, param: UpdateEnquiryParam) -> Result<Enquiry, AppError> {
        Ok(EnquiryRepository::new(self.db).update(param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(EnquiryRepository::new(self.db).delete(id).await?)
    }

    pub async fn add_note(&self, param: CreateEnquiryNoteParam) -> Result<EnquiryNote, AppError> {
        Ok(EnquiryRepository::new(self.db).add_note(param).await?)
    }
}
