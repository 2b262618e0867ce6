//! Destination URL checks applied before a link is stored.
//!
//! A stored destination ends up verbatim in a `Location` header, so it must be
//! an absolute HTTP(S) URL made of visible ASCII only.

use url::Url;

/// Errors that can occur while checking a destination URL.
#[derive(Debug, thiserror::Error)]
pub enum DestinationError {
    #[error("is not a valid URL: {0}")]
    InvalidFormat(String),

    #[error("must use http or https")]
    UnsupportedProtocol,

    #[error("must include a host")]
    MissingHost,
}

/// Returns the form of `input` to store as a redirect destination.
///
/// The trimmed input is kept as written when it is visible ASCII only.
/// Otherwise (non-ASCII characters or inner spaces, for example) the percent-encoded
/// serialization produced by the `url` crate is stored instead.
///
/// # Security
///
/// Rejects `javascript:`, `data:`, `file:` and every other non-HTTP scheme.
///
/// # Errors
///
/// Returns [`DestinationError::InvalidFormat`] for malformed URLs,
/// [`DestinationError::UnsupportedProtocol`] for non-HTTP(S) schemes and
/// [`DestinationError::MissingHost`] for URLs without a host.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(storable_destination(" https://example.com ").unwrap(), "https://example.com");
/// assert_eq!(storable_destination("https://example.com/ü").unwrap(), "https://example.com/%C3%BC");
/// ```
pub fn storable_destination(input: &str) -> Result<String, DestinationError> {
    let trimmed = input.trim();

    let url = Url::parse(trimmed).map_err(|e| DestinationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(DestinationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(DestinationError::MissingHost);
    }

    if is_location_safe(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Ok(url.to_string())
    }
}

/// Whether `destination` can be sent as a `Location` header value unchanged.
pub fn is_location_safe(destination: &str) -> bool {
    !destination.is_empty() && destination.bytes().all(|b| b.is_ascii_graphic())
}
