use crate::server::{data::audit::AuditLogRepository, model::audit::CreateAuditLogParam};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod get_recent;

fn entry(action: &str) -> CreateAuditLogParam {
    CreateAuditLogParam {
        action: action.to_string(),
        entity_type: "course".to_string(),
        entity_id: Some("1".to_string()),
        actor: "Admin".to_string(),
        details: None,
    }
}
