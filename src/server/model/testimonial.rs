use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::testimonial::{
        CreateTestimonialDto, TestimonialDto, TestimonialStatus, UpdateTestimonialDto,
    },
    server::model::parse_stored,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: i32,
    pub image: Option<String>,
    pub featured: bool,
    pub status: TestimonialStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Testimonial {
    pub fn from_entity(entity: entity::testimonial::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            role: entity.role,
            content: entity.content,
            rating: entity.rating,
            image: entity.image,
            featured: entity.featured,
            status: parse_stored(&entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> TestimonialDto {
        TestimonialDto {
            id: self.id,
            name: self.name,
            role: self.role,
            content: self.content,
            rating: self.rating,
            image: self.image,
            featured: self.featured,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTestimonialParam {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: i32,
    pub image: Option<String>,
    pub featured: bool,
    pub status: TestimonialStatus,
}

impl CreateTestimonialParam {
    pub fn from_dto(dto: CreateTestimonialDto) -> Self {
        Self {
            name: dto.name,
            role: dto.role,
            content: dto.content,
            rating: dto.rating,
            image: dto.image,
            featured: dto.featured,
            status: dto.status,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTestimonialParam {
    pub id: i32,
    pub name: Option<String>,
    pub role: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i32>,
    pub image: Option<String>,
    pub featured: Option<bool>,
    pub status: Option<TestimonialStatus>,
}

impl UpdateTestimonialParam {
    pub fn from_dto(id: i32, dto: UpdateTestimonialDto) -> Self {
        Self {
            id,
            name: dto.name,
            role: dto.role,
            content: dto.content,
            rating: dto.rating,
            image: dto.image,
            featured: dto.featured,
            status: dto.status,
        }
    }
}
