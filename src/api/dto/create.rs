//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::PlatformUrls;
use crate::error::AppError;
use crate::utils::destination::storable_destination;

/// Request body for `POST /api/create`.
///
/// Every field is optional at the JSON level so that a missing
/// `fallback_url` can be reported with its own message instead of a generic
/// deserialization error. Blank platform URLs count as unset.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_destination"))]
    pub android_url: Option<String>,

    #[validate(custom(function = "validate_destination"))]
    pub ios_url: Option<String>,

    #[validate(custom(function = "validate_destination"))]
    pub windows_url: Option<String>,

    #[validate(custom(function = "validate_destination"))]
    pub macos_url: Option<String>,

    #[validate(custom(function = "validate_destination"))]
    pub linux_url: Option<String>,

    #[validate(custom(function = "validate_destination"))]
    pub fallback_url: Option<String>,
}

/// Checked creation input, ready for [`crate::application::services::LinkService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkInput {
    pub name: Option<String>,
    pub destinations: PlatformUrls,
    pub fallback_url: String,
}

impl CreateLinkRequest {
    /// Checks the request and normalizes every URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with `"fallback_url is required"` when
    /// the fallback is absent or blank, or naming the offending field when a
    /// URL is malformed.
    pub fn into_input(self) -> Result<LinkInput, AppError> {
        if is_blank(self.fallback_url.as_deref()) {
            return Err(AppError::bad_request("fallback_url is required"));
        }

        self.validate()?;

        let fallback_url = normalize(self.fallback_url)
            .ok_or_else(|| AppError::bad_request("fallback_url is required"))?;

        Ok(LinkInput {
            name: self.name,
            destinations: PlatformUrls {
                android: normalize(self.android_url),
                ios: normalize(self.ios_url),
                windows: normalize(self.windows_url),
                macos: normalize(self.macos_url),
                linux: normalize(self.linux_url),
            },
            fallback_url,
        })
    }
}

/// Successful creation response.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub success: bool,
    pub token: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Blank becomes `None`; anything else is already validated.
fn normalize(value: Option<String>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| storable_destination(&v).ok())
}

fn validate_destination(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }

    storable_destination(value).map(|_| ()).map_err(|e| {
        let mut err = ValidationError::new("url");
        err.message = Some(e.to_string().into());
        err
    })
}
