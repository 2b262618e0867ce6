//! Click entity representing a single resolved redirect.

use chrono::{DateTime, Utc};

use crate::domain::platform::DeviceType;

/// An immutable record of one redirect.
///
/// `country` is part of the stored schema but nothing populates it.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub device_type: DeviceType,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub country: Option<String>,
    pub redirected_to: String,
}

/// Request metadata captured when a token is followed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visit {
    /// Raw client descriptor (`User-Agent`), stored verbatim.
    pub user_agent: Option<String>,
    /// Origin address; the first hop when a proxy chain is present.
    pub ip_address: Option<String>,
}

impl Visit {
    pub fn new(user_agent: Option<&str>, ip_address: Option<String>) -> Self {
        Self {
            user_agent: user_agent.map(str::to_string),
            ip_address,
        }
    }
}
