/// Raised before any external call when the service configuration is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("bootstrap.configuration.missing_field: {0}")]
    MissingField(&'static str),
    #[error("bootstrap.configuration.empty_field: {0}")]
    EmptyField(&'static str),
    #[error("bootstrap.configuration.placeholder_field: {0}")]
    PlaceholderField(&'static str),
    #[error("bootstrap.configuration.source_unavailable: {0}")]
    SourceUnavailable(String),
}

impl ConfigurationError {
    /// Name of the offending field, when the error concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigurationError::MissingField(field)
            | ConfigurationError::EmptyField(field)
            | ConfigurationError::PlaceholderField(field) => Some(*field),
            ConfigurationError::SourceUnavailable(_) => None,
        }
    }
}

/// Failure reported by the external service connector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectorError {
    #[error("connector.invalid_project_id: {0}")]
    InvalidProjectId(String),
    #[error("connector.client_build_failed: {0}")]
    ClientBuild(String),
    #[error("connector.backend_unreachable: {0}")]
    Unreachable(String),
}

/// The external client could not be created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("bootstrap.initialization_failed: {cause}")]
pub struct InitializationError {
    #[source]
    pub cause: ConnectorError,
}

impl From<ConnectorError> for InitializationError {
    fn from(cause: ConnectorError) -> Self {
        Self { cause }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}
