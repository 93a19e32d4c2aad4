use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::student_call::repository::StudentCallRepository;

use super::errors::BootstrapError;
use super::state::BootstrapState;

/// Shared handle to the initialized document-store client.
///
/// Clones share the same underlying client; use [`ClientHandle::same_instance`]
/// to compare identity.
#[derive(Clone)]
pub struct ClientHandle {
    project_id: Arc<str>,
    calls: Arc<dyn StudentCallRepository>,
}

impl ClientHandle {
    pub fn new(project_id: &str, calls: Arc<dyn StudentCallRepository>) -> Self {
        Self {
            project_id: Arc::from(project_id),
            calls,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn calls(&self) -> &Arc<dyn StudentCallRepository> {
        &self.calls
    }

    pub fn same_instance(&self, other: &ClientHandle) -> bool {
        Arc::ptr_eq(&self.calls, &other.calls)
    }
}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHandle")
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}

/// Source of the process-wide client handle, injected into use cases.
#[async_trait]
pub trait ClientProvider: Send + Sync {
    async fn get_client(&self) -> Result<ClientHandle, BootstrapError>;
    fn state(&self) -> BootstrapState;
}
