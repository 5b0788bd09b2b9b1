//! Origin allow-list enforcement.
//!
//! Two pieces work together: [`cors_layer`] adds the CORS response headers for allowed
//! origins and answers preflight requests, while [`reject_unknown_origin`] refuses any
//! request whose `Origin` is not on the list. Requests without an `Origin` header
//! (curl, server-to-server, same-origin navigation) always pass.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::{model::api::ErrorDto, server::state::AppState};

/// Builds the CORS layer for the given normalized origins.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Rejects requests from origins outside the allow-list with 403.
pub async fn reject_unknown_origin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(origin) = request.headers().get(header::ORIGIN) else {
        return next.run(request).await;
    };

    let allowed = origin
        .to_str()
        .map(|value| value.trim_end_matches('/'))
        .is_ok_and(|value| state.allowed_origins.iter().any(|o| o == value));

    if !allowed {
        tracing::warn!("Rejected request from origin {:?}", origin);
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorDto {
                error: "Not allowed by CORS".to_string(),
            }),
        )
            .into_response();
    }

    next.run(request).await
}
