//! Redirect resolution: (stored link, client descriptor) → (destination, device).

use crate::domain::entities::Link;
use crate::domain::platform::DeviceType;

/// Outcome of resolving a link for one client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub device_type: DeviceType,
    pub destination: String,
}

/// Picks the destination for a client descriptor.
///
/// The platform URL is used when the classified platform has one configured;
/// otherwise the fallback URL. A missing descriptor classifies as
/// [`DeviceType::Other`].
pub fn resolve(link: &Link, user_agent: Option<&str>) -> Resolution {
    let device_type = DeviceType::classify(user_agent.unwrap_or_default());

    let destination = link
        .destinations
        .get(device_type)
        .unwrap_or(&link.fallback_url)
        .to_string();

    Resolution {
        device_type,
        destination,
    }
}
