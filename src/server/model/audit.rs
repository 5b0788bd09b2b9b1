use chrono::{DateTime, Utc};

use crate::model::audit::{AuditLogDto, CreateAuditLogDto};

#[derive(Debug, Clone, PartialEq)]
pub struct AuditLog {
    pub id: i32,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<String>,
    pub actor: String,
    pub details: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl AuditLog {
    pub fn from_entity(entity: entity::audit_log::Model) -> Self {
        Self {
            id: entity.id,
            action: entity.action,
            entity_type: entity.entity_type,
            entity_id: entity.entity_id,
            actor: entity.actor,
            details: entity.details,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AuditLogDto {
        AuditLogDto {
            id: self.id,
            action: self.action,
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            actor: self.actor,
            details: self.details,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAuditLogParam {
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<String>,
    pub actor: String,
    pub details: Option<serde_json::Value>,
}

impl CreateAuditLogParam {
    pub fn from_dto(dto: CreateAuditLogDto) -> Self {
        Self {
            action: dto.action,
            entity_type: dto.entity_type,
            entity_id: dto.entity_id,
            actor: dto.actor,
            details: dto.details,
        }
    }
}
