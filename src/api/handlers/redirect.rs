//! Handler for smart link redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::domain::entities::Visit;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::ClientIp;

const NOT_FOUND_BODY: &str = "Link not found";
const FAILURE_BODY: &str = "Error processing link";

/// Redirects a token to the destination for the caller's platform.
///
/// # Endpoint
///
/// `GET /l/{token}`
///
/// # Request Flow
///
/// 1. Read `User-Agent` and the origin address
/// 2. Lock the active link, classify the client and pick its destination
/// 3. Increment the counter and store the click in the same transaction
/// 4. Return 302 Found
///
/// # Responses
///
/// Plain text bodies, not JSON:
///
/// - **302 Found** with `Location` set to the chosen destination
/// - **404 Not Found** `Link not found` for unknown or inactive tokens
/// - **500 Internal Server Error** `Error processing link`; no click was recorded
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
    ClientIp(ip_address): ClientIp,
    headers: HeaderMap,
) -> Response {
    // Opaque bytes are replaced rather than discarding the whole descriptor.
    let user_agent = headers
        .get(header::USER_AGENT)
        .map(|v| String::from_utf8_lossy(v.as_bytes()));

    let visit = Visit::new(user_agent.as_deref(), ip_address);

    match state.redirect_service.follow(&token, visit).await {
        Ok(click) => match HeaderValue::from_str(&click.redirected_to) {
            Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
            Err(e) => {
                tracing::error!(token = %token, error = %e, "Stored destination is not a valid header");
                (StatusCode::INTERNAL_SERVER_ERROR, FAILURE_BODY).into_response()
            }
        },
        Err(AppError::NotFound(_)) => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
        Err(e) => {
            tracing::error!(token = %token, error = %e, "Redirect failed");
            (StatusCode::INTERNAL_SERVER_ERROR, FAILURE_BODY).into_response()
        }
    }
}
