use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::bootstrap::client::ClientProvider;
use business::domain::bootstrap::state::BootstrapState;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Document-store client state: uninitialized, initializing, ready or failed
    pub client: String,
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    clients: Arc<dyn ClientProvider>,
}

impl Api {
    pub fn new(clients: Arc<dyn ClientProvider>) -> Self {
        Self { clients }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service and of its document-store
    /// client. This endpoint is public and does not require authentication.
    ///
    /// ## Response
    /// - `status`: "healthy" when the client is ready, "degraded" otherwise
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `version`: Service version from Cargo.toml
    /// - `client`: Bootstrapper state
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let state = self.clients.state();
        let status = match state {
            BootstrapState::Ready => "healthy",
            _ => "degraded",
        };

        Json(HealthCheckResponse {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            client: state.to_string(),
        })
    }
}
