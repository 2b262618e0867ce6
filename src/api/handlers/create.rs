//! Handler for the link creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, Uri},
};

use crate::api::dto::create::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::{public_base_url, redirect_url};

/// Creates a smart link.
///
/// # Endpoint
///
/// `POST /api/create`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Spring campaign",
///   "android_url": "https://play.google.com/store/apps/details?id=com.example",
///   "ios_url": "https://apps.apple.com/app/id123",
///   "fallback_url": "https://example.com"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "token": "q2sd8Jk1LmPz0aXw",
///   "url": "https://links.example.com/l/q2sd8Jk1LmPz0aXw",
///   "created_at": "2024-01-01T12:00:00Z"
/// }
/// ```
///
/// The `url` base is `PUBLIC_BASE_URL` when configured, otherwise the
/// `Host` header (or the request authority) with the scheme from
/// `X-Forwarded-Proto`.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, `fallback_url` is
/// missing, or a URL is invalid. Returns 500 if the link could not be stored.
pub async fn create_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<Json<CreateLinkResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;
    let input = payload.into_input()?;

    let base_url = match &state.public_base_url {
        Some(base) => base.clone(),
        None => public_base_url(&headers, &uri)?,
    };

    let link = state
        .link_service
        .create_link(input.name, input.destinations, input.fallback_url)
        .await?;

    tracing::info!(token = %link.token, name = %link.name, "Link created");

    Ok(Json(CreateLinkResponse {
        success: true,
        url: redirect_url(&base_url, &link.token),
        token: link.token,
        created_at: link.created_at,
    }))
}
