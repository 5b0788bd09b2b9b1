use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        audit::{AuditLogDto, CreateAuditLogDto},
    },
    server::{
        error::AppError, model::audit::CreateAuditLogParam, service::audit::AuditLogService,
        state::AppState, util::extract::{ApiJson, ApiQuery},
    },
};

/// Tag for grouping audit log endpoints in OpenAPI documentation
pub static AUDIT_TAG: &str = "audit";

#[derive(Deserialize)]
pub struct AuditLogListParams {
    pub limit: Option<u64>,
}

/// List the newest audit log entries.
#[utoipa::path(
    get,
    path = "/api/audit-logs",
    tag = AUDIT_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Maximum entries to return (default: 100, max: 500)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved audit logs", body = Vec<AuditLogDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_audit_logs(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<AuditLogListParams>,
) -> Result<impl IntoResponse, AppError> {
    let entries = AuditLogService::new(&state.db)
        .get_recent(params.limit)
        .await
        .map_err(|e| e.fail_with("Failed to fetch audit logs"))?;

    let entries: Vec<AuditLogDto> = entries.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(entries)))
}

/// Record an admin action. `actor` defaults to `Admin`.
#[utoipa::path(
    post,
    path = "/api/audit-logs",
    tag = AUDIT_TAG,
    request_body = CreateAuditLogDto,
    responses(
        (status = 201, description = "Successfully recorded entry", body = AuditLogDto),
        (status = 400, description = "Invalid audit log data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_audit_log(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateAuditLogDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateAuditLogParam::from_dto(payload);
    let entry = AuditLogService::new(&state.db)
        .record(param)
        .await
        .map_err(|e| e.fail_with("Failed to create audit log"))?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}
