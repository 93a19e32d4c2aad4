use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use business::domain::bootstrap::config::ServiceConfig;
use business::domain::bootstrap::connector::ServiceConnector;
use business::domain::bootstrap::errors::ConnectorError;
use business::domain::student_call::repository::StudentCallRepository;

use crate::client::{DEFAULT_BASE_URL, FirestoreClient};
use crate::student_call::repository::StudentCallRepositoryFirestore;

const MAX_PROJECT_ID_LEN: usize = 30;

/// Creates the Firestore-backed call store for a validated configuration.
///
/// No request is sent while connecting; the first write or query is the
/// first network round-trip.
pub struct FirestoreConnector {
    base_url: String,
    timeout: Duration,
}

impl FirestoreConnector {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Points the connector at another endpoint, e.g. the local emulator.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

impl Default for FirestoreConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceConnector for FirestoreConnector {
    async fn connect(
        &self,
        config: &ServiceConfig,
    ) -> Result<Arc<dyn StudentCallRepository>, ConnectorError> {
        validate_project_id(config.project_id())?;

        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ConnectorError::ClientBuild(e.to_string()))?;

        tracing::debug!(base_url = %self.base_url, project_id = config.project_id(), "Firestore client built");
        let client = FirestoreClient::new(
            http,
            &self.base_url,
            config.project_id(),
            config.api_key(),
        );
        Ok(Arc::new(StudentCallRepositoryFirestore::new(client)))
    }
}

/// Lowercase letters, digits and hyphens; starts with a letter, does not end
/// with a hyphen.
fn validate_project_id(project_id: &str) -> Result<(), ConnectorError> {
    let invalid = || ConnectorError::InvalidProjectId(project_id.to_string());

    let first = project_id.chars().next().ok_or_else(invalid)?;
    if !first.is_ascii_lowercase()
        || project_id.len() > MAX_PROJECT_ID_LEN
        || project_id.ends_with('-')
        || !project_id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(invalid());
    }
    Ok(())
}
