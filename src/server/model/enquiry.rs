//! Enquiry domain models and parameters.
//!
//! Enquiries arrive from the public contact form and collect staff notes over time.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        api::CreateNoteDto,
        enquiry::{CreateEnquiryDto, EnquiryDto, EnquiryNoteDto, EnquiryStatus, UpdateEnquiryDto},
    },
    server::model::parse_stored,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Enquiry {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub enquiry_type: String,
    pub message: String,
    pub status: EnquiryStatus,
    /// Oldest first.
    pub notes: Vec<EnquiryNote>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Enquiry {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Enquiry)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is not a known enquiry status
    pub fn from_entity(
        entity: entity::enquiry::Model,
        notes: Vec<EnquiryNote>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            enquiry_type: entity.enquiry_type,
            message: entity.message,
            status: parse_stored(&entity.status)?,
            notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> EnquiryDto {
        EnquiryDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            enquiry_type: self.enquiry_type,
            message: self.message,
            status: self.status,
            notes: self.notes.into_iter().map(|n| n.into_dto()).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnquiryNote {
    pub id: i32,
    pub enquiry_id: i32,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl EnquiryNote {
    pub fn from_entity(entity: entity::enquiry_note::Model) -> Self {
        Self {
            id: entity.id,
            enquiry_id: entity.enquiry_id,
            content: entity.content,
            author: entity.author,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> EnquiryNoteDto {
        EnquiryNoteDto {
            id: self.id,
            enquiry_id: self.enquiry_id,
            content: self.content,
            author: self.author,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEnquiryParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub enquiry_type: String,
    pub message: String,
    pub status: EnquiryStatus,
}

impl CreateEnquiryParam {
    pub fn from_dto(dto: CreateEnquiryDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            enquiry_type: dto.enquiry_type,
            message: dto.message,
            status: dto.status,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEnquiryParam {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub enquiry_type: Option<String>,
    pub message: Option<String>,
    pub status: Option<EnquiryStatus>,
}

impl UpdateEnquiryParam {
    pub fn from_dto(id: i32, dto: UpdateEnquiryDto) -> Self {
        Self {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            enquiry_type: dto.enquiry_type,
            message: dto.message,
            status: dto.status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEnquiryNoteParam {
    pub enquiry_id: i32,
    pub content: String,
    pub author: String,
}

impl CreateEnquiryNoteParam {
    pub fn from_dto(enquiry_id: i32, dto: CreateNoteDto) -> Self {
        Self {
            enquiry_id,
            content: dto.content,
            author: dto.author,
        }
    }
}
