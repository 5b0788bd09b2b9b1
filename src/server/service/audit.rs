use sea_orm::DatabaseConnection;

use crate::server::{
    data::audit::AuditLogRepository,
    error::AppError,
    model::audit::{AuditLog, CreateAuditLogParam},
};

pub const DEFAULT_AUDIT_LIMIT: u64 = 100;
pub const MAX_AUDIT_LIMIT: u64 = 500;

pub struct AuditLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the newest entries; `limit` defaults to 100 and is capped at 500
    pub async fn get_recent(&self, limit: Option<u64>) -> Result<Vec<AuditLog>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_AUDIT_LIMIT).min(MAX_AUDIT_LIMIT);

        Ok(AuditLogRepository::new(self.db).get_recent(limit).await?)
    }

    pub async fn record(&self, param: CreateAuditLogParam) -> Result<AuditLog, AppError> {
        Ok(AuditLogRepository::new(self.db).create(param).await?)
    }
}
