//! Public base URL derived from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds the `scheme://host[:port]` the client used to reach the service.
///
/// - Host (port included) comes from the `Host` header, or from the request
///   URI authority when there is none (HTTP/2 sends `:authority` instead)
/// - Scheme comes from the first `X-Forwarded-Proto` entry when it is `http`
///   or `https`, otherwise `http`
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - Neither the `Host` header nor the URI carries a host
/// - The header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "links.example.com:8080".parse().unwrap());
///
/// let uri = Uri::from_static("/api/create");
///
/// assert_eq!(public_base_url(&headers, &uri).unwrap(), "http://links.example.com:8080");
/// ```
pub fn public_base_url(headers: &HeaderMap, uri: &Uri) -> Result<String, AppError> {
    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header"))?
            .trim(),
        None => uri.authority().map(|a| a.as_str()).unwrap_or_default(),
    };

    if host.is_empty() {
        return Err(AppError::bad_request("Missing Host header"));
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https")
        .unwrap_or_else(|| "http".to_string());

    Ok(format!("{scheme}://{host}"))
}

/// Joins a base URL and a token into the public redirect URL.
pub fn redirect_url(base_url: &str, token: &str) -> String {
    format!("{}/l/{}", base_url.trim_end_matches('/'), token)
}
