//! Link entity: a named bundle of per-platform destinations plus a fallback.

use chrono::{DateTime, Utc};

use crate::domain::platform::DeviceType;

/// Optional destination per client platform.
///
/// Empty strings are treated the same as missing URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformUrls {
    pub android: Option<String>,
    pub ios: Option<String>,
    pub windows: Option<String>,
    pub macos: Option<String>,
    pub linux: Option<String>,
}

impl PlatformUrls {
    /// Returns the configured URL for a device type, if any.
    ///
    /// [`DeviceType::Other`] never has a platform URL.
    pub fn get(&self, device: DeviceType) -> Option<&str> {
        let url = match device {
            DeviceType::Android => &self.android,
            DeviceType::Ios => &self.ios,
            DeviceType::Windows => &self.windows,
            DeviceType::Macos => &self.macos,
            DeviceType::Linux => &self.linux,
            DeviceType::Other => return None,
        };

        url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// A stored smart link.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub token: String,
    pub name: String,
    pub destinations: PlatformUrls,
    pub fallback_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

/// Input data for inserting a new link.
///
/// The token is generated by the application layer before the insert; the
/// store assigns the id, timestamps, counter and active flag.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub token: String,
    pub name: String,
    pub destinations: PlatformUrls,
    pub fallback_url: String,
}
