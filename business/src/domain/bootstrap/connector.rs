use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::student_call::repository::StudentCallRepository;

use super::config::ServiceConfig;
use super::errors::ConnectorError;

/// Port to the external document-store SDK.
///
/// `connect` covers both steps of the SDK bootstrap: registering the app
/// with its options and obtaining the document-store client for it.
#[async_trait]
pub trait ServiceConnector: Send + Sync {
    async fn connect(
        &self,
        config: &ServiceConfig,
    ) -> Result<Arc<dyn StudentCallRepository>, ConnectorError>;
}
