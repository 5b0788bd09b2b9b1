//! Audit log data repository.
//!
//! Entries are append-only; there is no update or delete operation.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    QuerySelect,
};

use crate::server::model::audit::{AuditLog, CreateAuditLogParam};

pub struct AuditLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the most recent entries, newest first.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<AuditLog>, DbErr> {
        let entries = entity::prelude::AuditLog::find()
            .order_by_desc(entity::audit_log::Column::CreatedAt)
            .order_by_desc(entity::audit_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entries.into_iter().map(AuditLog::from_entity).collect())
    }

    pub async fn create(&self, param: CreateAuditLogParam) -> Result<AuditLog, DbErr> {
        let entity = entity::audit_log::ActiveModel {
            action: ActiveValue::Set(param.action),
            entity_type: ActiveValue::Set(param.entity_type),
            entity_id: ActiveValue::Set(param.entity_id),
            actor: ActiveValue::Set(param.actor),
            details: ActiveValue::Set(param.details),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AuditLog::from_entity(entity))
    }
}
