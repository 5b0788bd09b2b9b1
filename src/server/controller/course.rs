use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        course::{CourseDto, CreateCourseDto, ReconcileCourseModulesDto, UpdateCourseDto},
    },
    server::{
        error::AppError,
        model::course::{CreateCourseParam, ReconcileCourseModulesParam, UpdateCourseParam},
        service::course::CourseService,
        state::AppState,
        util::extract::{ApiJson, ApiPath},
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// List all courses with their modules, in creation order.
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved courses", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db)
        .get_all()
        .await
        .map_err(|e| e.fail_with("Failed to fetch courses"))?;

    let courses: Vec<CourseDto> = courses.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(courses)))
}

/// Get a course by ID.
///
/// # Returns
/// - `200 OK` - The course with its modules
/// - `404 Not Found` - No course has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved course", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db)
        .get_by_id(id)
        .await
        .map_err(|e| e.fail_with("Failed to fetch course"))?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Get a course by its slug.
#[utoipa::path(
    get,
    path = "/api/courses/slug/{slug}",
    tag = COURSE_TAG,
    params(
        ("slug" = String, Path, description = "Course slug")
    ),
    responses(
        (status = 200, description = "Successfully retrieved course", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_by_slug(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db)
        .get_by_slug(&slug)
        .await
        .map_err(|e| e.fail_with("Failed to fetch course"))?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Create a course.
///
/// Only `slug` and `title` are required. Nested `modules` are created in the same
/// transaction, each defaulting its `orderIndex` to its position in the list.
///
/// # Returns
/// - `201 Created` - The created course with generated module IDs
/// - `400 Bad Request` - Malformed body or unknown status
/// - `500 Internal Server Error` - Duplicate slug or database error
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Successfully created course", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateCourseParam::from_dto(payload);
    let course = CourseService::new(&state.db)
        .create(param)
        .await
        .map_err(|e| e.fail_with("Failed to create course"))?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

/// Update a course's scalar fields.
///
/// A `modules` key in the body is ignored; use `PUT /api/courses/{id}/modules` to
/// change modules.
///
/// # Returns
/// - `200 OK` - The updated course with its stored modules
/// - `400 Bad Request` - Malformed body
/// - `500 Internal Server Error` - Course not found or database error
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Successfully updated course", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.modules.is_some() {
        tracing::warn!(
            "Ignoring modules in update of course {}; use the modules endpoint",
            id
        );
    }

    let param = UpdateCourseParam::from_dto(id, payload);
    let course = CourseService::new(&state.db)
        .update(param)
        .await
        .map_err(|e| e.fail_with("Failed to update course"))?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Replace a course's module list.
///
/// Entries with an `id` update that module, entries without one create a module, and
/// stored modules missing from the list are deleted. Runs as one transaction.
///
/// # Returns
/// - `200 OK` - The course with its new modules
/// - `400 Bad Request` - Malformed body, or an `id` not belonging to this course
/// - `404 Not Found` - No course has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/courses/{id}/modules",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body = ReconcileCourseModulesDto,
    responses(
        (status = 200, description = "Successfully updated modules", body = CourseDto),
        (status = 400, description = "Invalid module data", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reconcile_course_modules(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<ReconcileCourseModulesDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = ReconcileCourseModulesParam::from_dto(id, payload.modules);
    let course = CourseService::new(&state.db)
        .reconcile_modules(param)
        .await
        .map_err(|e| e.fail_with("Failed to update course modules"))?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Delete a course and its modules.
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted course", body = MessageDto),
        (status = 500, description = "Course not found or database error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    CourseService::new(&state.db)
        .delete(id)
        .await
        .map_err(|e| e.fail_with("Failed to delete course"))?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Course deleted successfully".to_string(),
        }),
    ))
}
