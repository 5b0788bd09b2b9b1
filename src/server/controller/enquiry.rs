use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreateNoteDto, ErrorDto, MessageDto},
        enquiry::{CreateEnquiryDto, EnquiryDto, EnquiryNoteDto, UpdateEnquiryDto},
    },
    server::{
        error::AppError,
        model::enquiry::{CreateEnquiryNoteParam, CreateEnquiryParam, UpdateEnquiryParam},
        service::enquiry::EnquiryService,
        state::AppState,
        util::extract::{ApiJson, ApiPath},
    },
};

/// Tag for grouping enquiry endpoints in OpenAPI documentation
pub static ENQUIRY_TAG: &str = "enquiry";

/// List all enquiries with their notes, newest first.
#[utoipa::path(
    get,
    path = "/api/enquiries",
    tag = ENQUIRY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved enquiries", body = Vec<EnquiryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enquiries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let enquiries = EnquiryService::new(&state.db)
        .get_all()
        .await
        .map_err(|e| e.fail_with("Failed to fetch enquiries"))?;

    let enquiries: Vec<EnquiryDto> = enquiries.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(enquiries)))
}

/// Get an enquiry by ID with its notes.
#[utoipa::path(
    get,
    path = "/api/enquiries/{id}",
    tag = ENQUIRY_TAG,
    params(
        ("id" = i32, Path, description = "Enquiry ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved enquiry", body = EnquiryDto),
        (status = 404, description = "Enquiry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enquiry_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let enquiry = EnquiryService::new(&state.db)
        .get_by_id(id)
        .await
        .map_err(|e| e.fail_with("Failed to fetch enquiry"))?
        .ok_or_else(|| AppError::NotFound("Enquiry not found".to_string()))?;

    Ok((StatusCode::OK, Json(enquiry.into_dto())))
}

/// Submit an enquiry from the public contact form.
///
/// `status` defaults to `new`.
///
/// # Returns
/// - `201 Created` - The stored enquiry
/// - `400 Bad Request` - Missing fields or unknown status
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/enquiries",
    tag = ENQUIRY_TAG,
    request_body = CreateEnquiryDto,
    responses(
        (status = 201, description = "Successfully created enquiry", body = EnquiryDto),
        (status = 400, description = "Invalid enquiry data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_enquiry(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateEnquiryDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateEnquiryParam::from_dto(payload);
    let enquiry = EnquiryService::new(&state.db)
        .create(param)
        .await
        .map_err(|e| e.fail_with("Failed to create enquiry"))?;

    Ok((StatusCode::CREATED, Json(enquiry.into_dto())))
}

/// Update an enquiry.
///
/// `id`, `createdAt`, `updatedAt` and `notes` in the body are ignored; `updatedAt` is
/// refreshed by the server.
///
/// # Returns
/// - `200 OK` - The updated enquiry
/// - `400 Bad Request` - Malformed body
/// - `500 Internal Server Error` - Enquiry not found or database error
#[utoipa::path(
    put,
    path = "/api/enquiries/{id}",
    tag = ENQUIRY_TAG,
    params(
        ("id" = i32, Path, description = "Enquiry ID")
    ),
    request_body = UpdateEnquiryDto,
    responses(
        (status = 200, description = "Successfully updated enquiry", body = EnquiryDto),
        (status = 400, description = "Invalid enquiry data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_enquiry(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateEnquiryDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateEnquiryParam::from_dto(id, payload);
    let enquiry = EnquiryService::new(&state.db)
        .update(param)
        .await
        .map_err(|e| e.fail_with("Failed to update enquiry"))?;

    Ok((StatusCode::OK, Json(enquiry.into_dto())))
}

/// Delete an enquiry and its notes.
#[utoipa::path(
    delete,
    path = "/api/enquiries/{id}",
    tag = ENQUIRY_TAG,
    params(
        ("id" = i32, Path, description = "Enquiry ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted enquiry", body = MessageDto),
        (status = 500, description = "Enquiry not found or database error", body = ErrorDto)
    ),
)]
pub async fn delete_enquiry(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    EnquiryService::new(&state.db)
        .delete(id)
        .await
        .map_err(|e| e.fail_with("Failed to delete enquiry"))?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Enquiry deleted successfully".to_string(),
        }),
    ))
}

/// Add a staff note to an enquiry.
///
/// `author` defaults to `Admin`. Responds with the created note only.
///
/// # Returns
/// - `201 Created` - The created note
/// - `400 Bad Request` - Malformed body
/// - `500 Internal Server Error` - Enquiry not found or database error
#[utoipa::path(
    post,
    path = "/api/enquiries/{id}/notes",
    tag = ENQUIRY_TAG,
    params(
        ("id" = i32, Path, description = "Enquiry ID")
    ),
    request_body = CreateNoteDto,
    responses(
        (status = 201, description = "Successfully added note", body = EnquiryNoteDto),
        (status = 400, description = "Invalid note data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_enquiry_note(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<CreateNoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateEnquiryNoteParam::from_dto(id, payload);
    let note = EnquiryService::new(&state.db)
        .add_note(param)
        .await
        .map_err(|e| e.fail_with("Failed to add note"))?;

    Ok((StatusCode::CREATED, Json(note.into_dto())))
}
