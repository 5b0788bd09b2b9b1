//! CMS page domain models and parameters.
//!
//! A page is identified publicly by its slug and owns an ordered list of sections.
//! Section content is free-form JSON interpreted by the marketing site per section type.

use chrono::{DateTime, Utc};

use crate::model::page::{
    CreatePageDto, PageDto, PageSectionDto, PageSectionInputDto, UpdatePageDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: i32,
    pub slug: String,
    pub title: String,
    /// Sorted by `order_index` ascending.
    pub sections: Vec<PageSection>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// Converts entity models to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::cms_page::Model, sections: Vec<PageSection>) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            title: entity.title,
            sections,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PageDto {
        PageDto {
            id: self.id,
            slug: self.slug,
            title: self.title,
            sections: self.sections.into_iter().map(|s| s.into_dto()).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageSection {
    pub id: i32,
    pub page_id: i32,
    pub section_type: String,
    pub title: Option<String>,
    pub content: serde_json::Value,
    pub order_index: i32,
}

impl PageSection {
    pub fn from_entity(entity: entity::cms_page_section::Model) -> Self {
        Self {
            id: entity.id,
            page_id: entity.page_id,
            section_type: entity.section_type,
            title: entity.title,
            content: entity.content,
            order_index: entity.order_index,
        }
    }

    pub fn into_dto(self) -> PageSectionDto {
        PageSectionDto {
            id: self.id,
            page_id: self.page_id,
            section_type: self.section_type,
            title: self.title,
            content: self.content,
            order_index: self.order_index,
        }
    }
}

/// Section to be written for a page, with its final position resolved.
#[derive(Debug, Clone)]
pub struct PageSectionParam {
    pub section_type: String,
    pub title: Option<String>,
    pub content: serde_json::Value,
    pub order_index: i32,
}

impl PageSectionParam {
    /// Converts submitted sections, defaulting each `order_index` to its list position.
    pub fn from_dtos(sections: Vec<PageSectionInputDto>) -> Vec<Self> {
        sections
            .into_iter()
            .enumerate()
            .map(|(position, dto)| Self {
                section_type: dto.section_type,
                title: dto.title,
                content: dto.content,
                order_index: dto.order_index.unwrap_or(position as i32),
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct CreatePageParam {
    pub slug: String,
    pub title: String,
    pub sections: Vec<PageSectionParam>,
}

impl CreatePageParam {
    pub fn from_dto(dto: CreatePageDto) -> Self {
        Self {
            slug: dto.slug,
            title: dto.title,
            sections: PageSectionParam::from_dtos(dto.sections),
        }
    }
}

/// Partial page update.
///
/// `None` fields are left as stored; `Some(sections)` replaces every section of the page.
#[derive(Debug, Clone)]
pub struct UpdatePageParam {
    pub id: i32,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub sections: Option<Vec<PageSectionParam>>,
}

impl UpdatePageParam {
    pub fn from_dto(id: i32, dto: UpdatePageDto) -> Self {
        Self {
            id,
            slug: dto.slug,
            title: dto.title,
            sections: dto.sections.map(PageSectionParam::from_dtos),
        }
    }
}
