use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        testimonial::{CreateTestimonialDto, TestimonialDto, UpdateTestimonialDto},
    },
    server::{
        error::AppError,
        model::testimonial::{CreateTestimonialParam, UpdateTestimonialParam},
        service::testimonial::TestimonialService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Tag for grouping testimonial endpoints in OpenAPI documentation
pub static TESTIMONIAL_TAG: &str = "testimonial";

#[derive(Deserialize)]
pub struct TestimonialListParams {
    pub status: Option<String>,
}

/// List testimonials, newest first, optionally filtered by exact status.
#[utoipa::path(
    get,
    path = "/api/testimonials",
    tag = TESTIMONIAL_TAG,
    params(
        ("status" = Option<String>, Query, description = "Exact status to filter by")
    ),
    responses(
        (status = 200, description = "Successfully retrieved testimonials", body = Vec<TestimonialDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_testimonials(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TestimonialListParams>,
) -> Result<impl IntoResponse, AppError> {
    let testimonials = TestimonialService::new(&state.db)
        .get_all(params.status.as_deref())
        .await
        .map_err(|e| e.fail_with("Failed to fetch testimonials"))?;

    let testimonials: Vec<TestimonialDto> =
        testimonials.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(testimonials)))
}

#[utoipa::path(
    get,
    path = "/api/testimonials/{id}",
    tag = TESTIMONIAL_TAG,
    params(
        ("id" = i32, Path, description = "Testimonial ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved testimonial", body = TestimonialDto),
        (status = 404, description = "Testimonial not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_testimonial_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let testimonial = TestimonialService::new(&state.db)
        .get_by_id(id)
        .await
        .map_err(|e| e.fail_with("Failed to fetch testimonial"))?
        .ok_or_else(|| AppError::NotFound("Testimonial not found".to_string()))?;

    Ok((StatusCode::OK, Json(testimonial.into_dto())))
}

/// Create a testimonial.
///
/// # Returns
/// - `201 Created` - The stored testimonial
/// - `400 Bad Request` - Malformed body or rating outside 1..=5
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/testimonials",
    tag = TESTIMONIAL_TAG,
    request_body = CreateTestimonialDto,
    responses(
        (status = 201, description = "Successfully created testimonial", body = TestimonialDto),
        (status = 400, description = "Invalid testimonial data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_testimonial(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateTestimonialDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateTestimonialParam::from_dto(payload);
    let testimonial = TestimonialService::new(&state.db)
        .create(param)
        .await
        .map_err(|e| e.fail_with("Failed to create testimonial"))?;

    Ok((StatusCode::CREATED, Json(testimonial.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/testimonials/{id}",
    tag = TESTIMONIAL_TAG,
    params(
        ("id" = i32, Path, description = "Testimonial ID")
    ),
    request_body = UpdateTestimonialDto,
    responses(
        (status = 200, description = "Successfully updated testimonial", body = TestimonialDto),
        (status = 400, description = "Invalid testimonial data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_testimonial(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateTestimonialDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateTestimonialParam::from_dto(id, payload);
    let testimonial = TestimonialService::new(&state.db)
        .update(param)
        .await
        .map_err(|e| e.fail_with("Failed to update testimonial"))?;

    Ok((StatusCode::OK, Json(testimonial.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/testimonials/{id}",
    tag = TESTIMONIAL_TAG,
    params(
        ("id" = i32, Path, description = "Testimonial ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted testimonial", body = MessageDto),
        (status = 500, description = "Testimonial not found or database error", body = ErrorDto)
    ),
)]
pub async fn delete_testimonial(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    TestimonialService::new(&state.db)
        .delete(id)
        .await
        .map_err(|e| e.fail_with("Failed to delete testimonial"))?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Testimonial deleted successfully".to_string(),
        }),
    ))
}
