//! DTO for the service descriptor at `/`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub create_link: &'static str,
    pub redirect: &'static str,
    pub stats: &'static str,
    pub analytics: &'static str,
    pub health: &'static str,
    pub readiness: &'static str,
}

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            endpoints: Endpoints {
                create_link: "POST /api/create",
                redirect: "GET /l/{token}",
                stats: "GET /api/stats/{token}",
                analytics: "GET /api/analytics/{token}",
                health: "GET /health",
                readiness: "GET /health/ready",
            },
            status: "online",
        }
    }
}
