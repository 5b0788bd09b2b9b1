use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        page::{CreatePageDto, PageDto, UpdatePageDto},
    },
    server::{
        error::AppError,
        model::page::{CreatePageParam, UpdatePageParam},
        service::page::PageService,
        state::AppState,
        util::extract::{ApiJson, ApiPath},
    },
};

/// Tag for grouping page endpoints in OpenAPI documentation
pub static PAGE_TAG: &str = "page";

/// List all CMS pages.
///
/// Returns every page with its sections, most recently updated first.
///
/// # Returns
/// - `200 OK` - List of pages
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cms/pages",
    tag = PAGE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved pages", body = Vec<PageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pages(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pages = PageService::new(&state.db)
        .get_all()
        .await
        .map_err(|e| e.fail_with("Failed to fetch pages"))?;

    let pages: Vec<PageDto> = pages.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(pages)))
}

/// Get a page by its slug.
///
/// Public lookup used by the marketing site. Sections are ordered by `orderIndex`.
///
/// # Returns
/// - `200 OK` - The page with its sections
/// - `404 Not Found` - No page has this slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cms/pages/slug/{slug}",
    tag = PAGE_TAG,
    params(
        ("slug" = String, Path, description = "Page slug")
    ),
    responses(
        (status = 200, description = "Successfully retrieved page", body = PageDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page_by_slug(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageService::new(&state.db)
        .get_by_slug(&slug)
        .await
        .map_err(|e| e.fail_with("Failed to fetch page"))?
        .ok_or_else(|| AppError::NotFound("Page not found".to_string()))?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Create a page with its sections.
///
/// Sections without an `orderIndex` take their position in the submitted list.
///
/// # Returns
/// - `201 Created` - The created page
/// - `400 Bad Request` - Malformed body
/// - `500 Internal Server Error` - Duplicate slug or database error
#[utoipa::path(
    post,
    path = "/api/cms/pages",
    tag = PAGE_TAG,
    request_body = CreatePageDto,
    responses(
        (status = 201, description = "Successfully created page", body = PageDto),
        (status = 400, description = "Invalid page data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_page(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreatePageDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreatePageParam::from_dto(payload);
    let page = PageService::new(&state.db)
        .create(param)
        .await
        .map_err(|e| e.fail_with("Failed to create page"))?;

    Ok((StatusCode::CREATED, Json(page.into_dto())))
}

/// Update a page.
///
/// Overwrites `slug` and `title` when present. When `sections` is present the page's
/// sections are replaced as a whole.
///
/// # Returns
/// - `200 OK` - The updated page
/// - `400 Bad Request` - Malformed body
/// - `500 Internal Server Error` - Page not found or database error
#[utoipa::path(
    put,
    path = "/api/cms/pages/{id}",
    tag = PAGE_TAG,
    params(
        ("id" = i32, Path, description = "Page ID")
    ),
    request_body = UpdatePageDto,
    responses(
        (status = 200, description = "Successfully updated page", body = PageDto),
        (status = 400, description = "Invalid page data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_page(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdatePageDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdatePageParam::from_dto(id, payload);
    let page = PageService::new(&state.db)
        .update(param)
        .await
        .map_err(|e| e.fail_with("Failed to update page"))?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Delete a page and its sections.
#[utoipa::path(
    delete,
    path = "/api/cms/pages/{id}",
    tag = PAGE_TAG,
    params(
        ("id" = i32, Path, description = "Page ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted page", body = MessageDto),
        (status = 500, description = "Page not found or database error", body = ErrorDto)
    ),
)]
pub async fn delete_page(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    PageService::new(&state.db)
        .delete(id)
        .await
        .map_err(|e| e.fail_with("Failed to delete page"))?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Page deleted successfully".to_string(),
        }),
    ))
}
