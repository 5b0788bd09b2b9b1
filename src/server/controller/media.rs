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
        media::{CreateMediaDto, GalleryYearDto, MediaAssetDto, UpdateMediaDto},
    },
    server::{
        error::AppError,
        model::media::{CreateMediaAssetParam, UpdateMediaAssetParam},
        service::media::MediaService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Tag for grouping media endpoints in OpenAPI documentation
pub static MEDIA_TAG: &str = "media";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaListParams {
    /// Only the literal `true` filters; any other value returns every asset.
    pub is_gallery: Option<String>,
}

/// List media assets, newest first.
///
/// Each asset carries both `assetType` and its `type` alias.
#[utoipa::path(
    get,
    path = "/api/media",
    tag = MEDIA_TAG,
    params(
        ("isGallery" = Option<String>, Query, description = "Pass `true` to list gallery assets only")
    ),
    responses(
        (status = 200, description = "Successfully retrieved media", body = Vec<MediaAssetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_media(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<MediaListParams>,
) -> Result<impl IntoResponse, AppError> {
    let gallery_only = params.is_gallery.as_deref() == Some("true");

    let assets = MediaService::new(&state.db)
        .get_all(gallery_only)
        .await
        .map_err(|e| e.fail_with("Failed to fetch media"))?;

    let assets: Vec<MediaAssetDto> = assets.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(assets)))
}

/// Public gallery grouped by year.
///
/// Years are listed newest first, assets without a year come last under `year: null`,
/// and items within a year follow their `orderIndex`.
#[utoipa::path(
    get,
    path = "/api/media/gallery",
    tag = MEDIA_TAG,
    responses(
        (status = 200, description = "Successfully retrieved gallery", body = Vec<GalleryYearDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gallery(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let years = MediaService::new(&state.db)
        .get_gallery()
        .await
        .map_err(|e| e.fail_with("Failed to fetch gallery"))?;

    let years: Vec<GalleryYearDto> = years.into_iter().map(|y| y.into_dto()).collect();

    Ok((StatusCode::OK, Json(years)))
}

/// Store upload metadata for a media asset.
///
/// Accepts `type` or `assetType`, preferring `type` when both are sent. `size`,
/// `galleryYear`, `orderIndex` and `isGallery` may be sent as strings, as posted by
/// HTML forms. `url` may be a data URI.
///
/// # Returns
/// - `201 Created` - The stored asset
/// - `400 Bad Request` - Missing fields, unknown type or unparsable numbers
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/media",
    tag = MEDIA_TAG,
    request_body = CreateMediaDto,
    responses(
        (status = 201, description = "Successfully created media asset", body = MediaAssetDto),
        (status = 400, description = "Invalid media data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_media(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateMediaDto>,
) -> Result<impl IntoResponse, AppError> {
    let asset_type = payload
        .resolved_type()
        .ok_or_else(|| AppError::BadRequest("missing field `type`".to_string()))?;

    let param = CreateMediaAssetParam::from_dto(asset_type, payload);
    let asset = MediaService::new(&state.db)
        .create(param)
        .await
        .map_err(|e| e.fail_with("Failed to create media"))?;

    Ok((StatusCode::CREATED, Json(asset.into_dto())))
}

/// Update the gallery fields of a media asset.
///
/// Only `isGallery`, `galleryYear`, `title`, `caption`, `location` and `orderIndex`
/// can change; `name`, `url` and `type` are fixed at upload.
#[utoipa::path(
    put,
    path = "/api/media/{id}",
    tag = MEDIA_TAG,
    params(
        ("id" = i32, Path, description = "Media asset ID")
    ),
    request_body = UpdateMediaDto,
    responses(
        (status = 200, description = "Successfully updated media asset", body = MediaAssetDto),
        (status = 400, description = "Invalid media data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_media(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateMediaDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateMediaAssetParam::from_dto(id, payload);
    let asset = MediaService::new(&state.db)
        .update(param)
        .await
        .map_err(|e| e.fail_with("Failed to update media"))?;

    Ok((StatusCode::OK, Json(asset.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/media/{id}",
    tag = MEDIA_TAG,
    params(
        ("id" = i32, Path, description = "Media asset ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted media asset", body = MessageDto),
        (status = 500, description = "Media asset not found or database error", body = ErrorDto)
    ),
)]
pub async fn delete_media(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    MediaService::new(&state.db)
        .delete(id)
        .await
        .map_err(|e| e.fail_with("Failed to delete media"))?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Media deleted successfully".to_string(),
        }),
    ))
}
