//! Franchise application domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        api::CreateNoteDto,
        franchise::{
            ApplicationDto, ApplicationStatus, CreateApplicationDto, FranchiseNoteDto,
            UpdateApplicationDto,
        },
    },
    server::model::parse_stored,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub investment_amount: String,
    pub experience: Option<String>,
    pub motivation: Option<String>,
    pub status: ApplicationStatus,
    /// Oldest first.
    pub notes: Vec<FranchiseNote>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Application {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Application)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is not a known application status
    pub fn from_entity(
        entity: entity::franchise_application::Model,
        notes: Vec<FranchiseNote>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            location: entity.location,
            investment_amount: entity.investment_amount,
            experience: entity.experience,
            motivation: entity.motivation,
            status: parse_stored(&entity.status)?,
            notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ApplicationDto {
        ApplicationDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            location: self.location,
            investment_amount: self.investment_amount,
            experience: self.experience,
            motivation: self.motivation,
            status: self.status,
            notes: self.notes.into_iter().map(|n| n.into_dto()).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FranchiseNote {
    pub id: i32,
    pub application_id: i32,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl FranchiseNote {
    pub fn from_entity(entity: entity::franchise_note::Model) -> Self {
        Self {
            id: entity.id,
            application_id: entity.application_id,
            content: entity.content,
            author: entity.author,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> FranchiseNoteDto {
        FranchiseNoteDto {
            id: self.id,
            application_id: self.application_id,
            content: self.content,
            author: self.author,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateApplicationParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub investment_amount: String,
    pub experience: Option<String>,
    pub motivation: Option<String>,
    pub status: ApplicationStatus,
}

impl CreateApplicationParam {
    pub fn from_dto(dto: CreateApplicationDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            location: dto.location,
            investment_amount: dto.investment_amount,
            experience: dto.experience,
            motivation: dto.motivation,
            status: dto.status,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateApplicationParam {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub investment_amount: Option<String>,
    pub experience: Option<String>,
    pub motivation: Option<String>,
    pub status: Option<ApplicationStatus>,
}

impl UpdateApplicationParam {
    pub fn from_dto(id: i32, dto: UpdateApplicationDto) -> Self {
        Self {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            location: dto.location,
            investment_amount: dto.investment_amount,
            experience: dto.experience,
            motivation: dto.motivation,
            status: dto.status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFranchiseNoteParam {
    pub application_id: i32,
    pub content: String,
    pub author: String,
}

impl CreateFranchiseNoteParam {
    pub fn from_dto(application_id: i32, dto: CreateNoteDto) -> Self {
        Self {
            application_id,
            content: dto.content,
            author: dto.author,
        }
    }
}
