use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreateNoteDto, ErrorDto, MessageDto},
        franchise::{ApplicationDto, CreateApplicationDto, FranchiseNoteDto, UpdateApplicationDto},
    },
    server::{
        error::AppError,
        model::franchise::{
            CreateApplicationParam, CreateFranchiseNoteParam, UpdateApplicationParam,
        },
        service::franchise::ApplicationService,
        state::AppState,
        util::extract::{ApiJson, ApiPath},
    },
};

/// Tag for grouping franchise application endpoints in OpenAPI documentation
pub static FRANCHISE_TAG: &str = "franchise";

/// List all franchise applications with their notes, newest first.
#[utoipa::path(
    get,
    path = "/api/franchise",
    tag = FRANCHISE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved applications", body = Vec<ApplicationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_applications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let applications = ApplicationService::new(&state.db)
        .get_all()
        .await
        .map_err(|e| e.fail_with("Failed to fetch applications"))?;

    let applications: Vec<ApplicationDto> =
        applications.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(applications)))
}

/// Get a franchise application by ID with its notes.
#[utoipa::path(
    get,
    path = "/api/franchise/{id}",
    tag = FRANCHISE_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved application", body = ApplicationDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_application_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let application = ApplicationService::new(&state.db)
        .get_by_id(id)
        .await
        .map_err(|e| e.fail_with("Failed to fetch application"))?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

/// Submit a franchise application. `status` defaults to `pending`.
#[utoipa::path(
    post,
    path = "/api/franchise",
    tag = FRANCHISE_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Successfully created application", body = ApplicationDto),
        (status = 400, description = "Invalid application data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateApplicationParam::from_dto(payload);
    let application = ApplicationService::new(&state.db)
        .create(param)
        .await
        .map_err(|e| e.fail_with("Failed to create application"))?;

    Ok((StatusCode::CREATED, Json(application.into_dto())))
}

/// Update a franchise application.
///
/// Server-owned fields (`id`, `createdAt`, `updatedAt`, `notes`) in the body are ignored.
#[utoipa::path(
    put,
    path = "/api/franchise/{id}",
    tag = FRANCHISE_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    request_body = UpdateApplicationDto,
    responses(
        (status = 200, description = "Successfully updated application", body = ApplicationDto),
        (status = 400, description = "Invalid application data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_application(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateApplicationParam::from_dto(id, payload);
    let application = ApplicationService::new(&state.db)
        .update(param)
        .await
        .map_err(|e| e.fail_with("Failed to update application"))?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/franchise/{id}",
    tag = FRANCHISE_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted application", body = MessageDto),
        (status = 500, description = "Application not found or database error", body = ErrorDto)
    ),
)]
pub async fn delete_application(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    ApplicationService::new(&state.db)
        .delete(id)
        .await
        .map_err(|e| e.fail_with("Failed to delete application"))?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Application deleted successfully".to_string(),
        }),
    ))
}

/// Add a staff note to a franchise application.
#[utoipa::path(
    post,
    path = "/api/franchise/{id}/notes",
    tag = FRANCHISE_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    request_body = CreateNoteDto,
    responses(
        (status = 201, description = "Successfully added note", body = FranchiseNoteDto),
        (status = 400, description = "Invalid note data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_application_note(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<CreateNoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateFranchiseNoteParam::from_dto(id, payload);
    let note = ApplicationService::new(&state.db)
        .add_note(param)
        .await
        .map_err(|e| e.fail_with("Failed to add note"))?;

    Ok((StatusCode::CREATED, Json(note.into_dto())))
}
