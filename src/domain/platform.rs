//! Client platform classification.
//!
//! Maps a raw `User-Agent` style descriptor to one of six device buckets using
//! case-insensitive substring rules evaluated in a fixed priority order.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Device bucket assigned to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Android,
    Ios,
    Windows,
    Macos,
    Linux,
    Other,
}

/// Classification rules, first match wins.
const RULES: &[(DeviceType, &[&str])] = &[
    (DeviceType::Android, &["android"]),
    (DeviceType::Ios, &["iphone", "ipad", "ipod"]),
    (DeviceType::Windows, &["windows"]),
    (DeviceType::Macos, &["macintosh", "mac os"]),
    (DeviceType::Linux, &["linux"]),
];

impl DeviceType {
    pub const ALL: [DeviceType; 6] = [
        DeviceType::Android,
        DeviceType::Ios,
        DeviceType::Windows,
        DeviceType::Macos,
        DeviceType::Linux,
        DeviceType::Other,
    ];

    /// Classifies a client descriptor.
    ///
    /// Device type is decided here alone; whether the link has a destination
    /// for that platform is irrelevant to the classification.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// assert_eq!(DeviceType::classify("Mozilla/5.0 (Linux; Android 14)"), DeviceType::Android);
    /// assert_eq!(DeviceType::classify("curl/8.4.0"), DeviceType::Other);
    /// ```
    pub fn classify(descriptor: &str) -> Self {
        let descriptor = descriptor.to_lowercase();

        RULES
            .iter()
            .find(|(_, needles)| needles.iter().any(|n| descriptor.contains(n)))
            .map(|(device, _)| *device)
            .unwrap_or(DeviceType::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Android => "android",
            DeviceType::Ios => "ios",
            DeviceType::Windows => "windows",
            DeviceType::Macos => "macos",
            DeviceType::Linux => "linux",
            DeviceType::Other => "other",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored device type is not one of the known buckets.
#[derive(Debug, thiserror::Error)]
#[error("unknown device type: {0}")]
pub struct UnknownDeviceType(pub String);

impl FromStr for DeviceType {
    type Err = UnknownDeviceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeviceType::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDeviceType(s.to_string()))
    }
}
