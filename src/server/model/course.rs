//! Course domain models and parameters.
//!
//! Provides the course catalogue model with its ordered modules, plus parameter types
//! for creation, scalar updates and module reconciliation.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::course::{
        CourseDto, CourseModuleDto, CourseStatus, CreateCourseDto, CreateCourseModuleDto,
        ReconcileCourseModuleDto, UpdateCourseDto,
    },
    server::model::parse_stored,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub short_description: Option<String>,
    pub category: String,
    pub level: String,
    pub duration: String,
    pub price: f64,
    pub image: Option<String>,
    pub instructor: String,
    pub total_students: i32,
    pub rating: f64,
    pub features: Vec<String>,
    pub status: CourseStatus,
    /// Sorted by `order_index` ascending.
    pub modules: Vec<CourseModule>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Course)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored status or features column holds an unexpected value
    pub fn from_entity(
        entity: entity::course::Model,
        modules: Vec<CourseModule>,
    ) -> Result<Self, DbErr> {
        let features: Vec<String> = serde_json::from_value(entity.features).map_err(|e| {
            DbErr::Custom(format!(
                "Invalid features for course {}: {}",
                entity.id, e
            ))
        })?;

        Ok(Self {
            id: entity.id,
            slug: entity.slug,
            title: entity.title,
            description: entity.description,
            short_description: entity.short_description,
            category: entity.category,
            level: entity.level,
            duration: entity.duration,
            price: entity.price,
            image: entity.image,
            instructor: entity.instructor,
            total_students: entity.total_students,
            rating: entity.rating,
            features,
            status: parse_stored(&entity.status)?,
            modules,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            slug: self.slug,
            title: self.title,
            description: self.description,
            short_description: self.short_description,
            category: self.category,
            level: self.level,
            duration: self.duration,
            price: self.price,
            image: self.image,
            instructor: self.instructor,
            total_students: self.total_students,
            rating: self.rating,
            features: self.features,
            status: self.status,
            modules: self.modules.into_iter().map(|m| m.into_dto()).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseModule {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub order_index: i32,
}

impl CourseModule {
    pub fn from_entity(entity: entity::course_module::Model) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            title: entity.title,
            description: entity.description,
            duration: entity.duration,
            order_index: entity.order_index,
        }
    }

    pub fn into_dto(self) -> CourseModuleDto {
        CourseModuleDto {
            id: self.id,
            course_id: self.course_id,
            title: self.title,
            description: self.description,
            duration: self.duration,
            order_index: self.order_index,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourseModuleParam {
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub order_index: i32,
}

impl CreateCourseModuleParam {
    /// Converts submitted modules, defaulting each `order_index` to its list position.
    pub fn from_dtos(modules: Vec<CreateCourseModuleDto>) -> Vec<Self> {
        modules
            .into_iter()
            .enumerate()
            .map(|(position, dto)| Self {
                title: dto.title,
                description: dto.description,
                duration: dto.duration,
                order_index: dto.order_index.unwrap_or(position as i32),
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourseParam {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub short_description: Option<String>,
    pub category: String,
    pub level: String,
    pub duration: String,
    pub price: f64,
    pub image: Option<String>,
    pub instructor: String,
    pub total_students: i32,
    pub rating: f64,
    pub features: Vec<String>,
    pub status: CourseStatus,
    pub modules: Vec<CreateCourseModuleParam>,
}

impl CreateCourseParam {
    pub fn from_dto(dto: CreateCourseDto) -> Self {
        Self {
            slug: dto.slug,
            title: dto.title,
            description: dto.description,
            short_description: dto.short_description,
            category: dto.category,
            level: dto.level,
            duration: dto.duration,
            price: dto.price,
            image: dto.image,
            instructor: dto.instructor,
            total_students: dto.total_students,
            rating: dto.rating,
            features: dto.features,
            status: dto.status,
            modules: CreateCourseModuleParam::from_dtos(dto.modules),
        }
    }
}

/// Scalar course update. Modules are never touched by this parameter.
#[derive(Debug, Clone, Default)]
pub struct UpdateCourseParam {
    pub id: i32,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub duration: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub instructor: Option<String>,
    pub total_students: Option<i32>,
    pub rating: Option<f64>,
    pub features: Option<Vec<String>>,
    pub status: Option<CourseStatus>,
}

impl UpdateCourseParam {
    /// Converts the update DTO, discarding its `modules` key.
    pub fn from_dto(id: i32, dto: UpdateCourseDto) -> Self {
        Self {
            id,
            slug: dto.slug,
            title: dto.title,
            description: dto.description,
            short_description: dto.short_description,
            category: dto.category,
            level: dto.level,
            duration: dto.duration,
            price: dto.price,
            image: dto.image,
            instructor: dto.instructor,
            total_students: dto.total_students,
            rating: dto.rating,
            features: dto.features,
            status: dto.status,
        }
    }
}

/// Desired module of a course after reconciliation.
///
/// With `id` set the stored module is updated, without it a new module is inserted.
#[derive(Debug, Clone)]
pub struct ReconcileCourseModuleParam {
    pub id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub order_index: i32,
}

#[derive(Debug, Clone)]
pub struct ReconcileCourseModulesParam {
    pub course_id: i32,
    pub modules: Vec<ReconcileCourseModuleParam>,
}

impl ReconcileCourseModulesParam {
    pub fn from_dto(course_id: i32, modules: Vec<ReconcileCourseModuleDto>) -> Self {
        Self {
            course_id,
            modules: modules
                .into_iter()
                .enumerate()
                .map(|(position, dto)| ReconcileCourseModuleParam {
                    id: dto.id,
                    title: dto.title,
                    description: dto.description,
                    duration: dto.duration,
                    order_index: dto.order_index.unwrap_or(position as i32),
                })
                .collect(),
        }
    }
}
