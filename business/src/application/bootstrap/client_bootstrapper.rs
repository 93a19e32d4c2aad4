use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::bootstrap::client::{ClientHandle, ClientProvider};
use crate::domain::bootstrap::config::{ConfigSource, load_config};
use crate::domain::bootstrap::connector::ServiceConnector;
use crate::domain::bootstrap::errors::{BootstrapError, InitializationError};
use crate::domain::bootstrap::state::BootstrapState;
use crate::domain::logger::Logger;

enum Slot {
    Uninitialized,
    Initializing,
    Ready(ClientHandle),
    Failed(BootstrapError),
}

/// Puts an abandoned `Initializing` slot back to `Uninitialized` when the
/// initializing future is dropped before it settles.
struct InitializingGuard<'a> {
    slot: &'a RwLock<Slot>,
}

impl Drop for InitializingGuard<'_> {
    fn drop(&mut self) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if matches!(*slot, Slot::Initializing) {
            *slot = Slot::Uninitialized;
        }
    }
}

/// Turns a configuration source into a single shared client handle.
///
/// The first `get_client` validates the configuration and connects; every
/// later call, concurrent or not, gets the cached handle. A failure is
/// recorded and returned again until [`ClientBootstrapper::reset`] is called.
pub struct ClientBootstrapper {
    source: Arc<dyn ConfigSource>,
    connector: Arc<dyn ServiceConnector>,
    logger: Arc<dyn Logger>,
    slot: RwLock<Slot>,
    init_lock: Mutex<()>,
}

impl ClientBootstrapper {
    pub fn new(
        source: Arc<dyn ConfigSource>,
        connector: Arc<dyn ServiceConnector>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            source,
            connector,
            logger,
            slot: RwLock::new(Slot::Uninitialized),
            init_lock: Mutex::new(()),
        }
    }

    /// Moves a failed bootstrapper back to `Uninitialized` so the next
    /// `get_client` tries again. Returns `false` in any other state.
    pub fn reset(&self) -> bool {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if !matches!(*slot, Slot::Failed(_)) {
            return false;
        }
        *slot = Slot::Uninitialized;
        self.logger.warn("Client bootstrapper reset after failure");
        true
    }

    fn cached(&self) -> Option<Result<ClientHandle, BootstrapError>> {
        match &*self.slot.read().unwrap_or_else(PoisonError::into_inner) {
            Slot::Ready(handle) => Some(Ok(handle.clone())),
            Slot::Failed(err) => Some(Err(err.clone())),
            Slot::Uninitialized | Slot::Initializing => None,
        }
    }

    fn set_slot(&self, next: Slot) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    async fn initialize(&self) -> Result<ClientHandle, BootstrapError> {
        let config = load_config(self.source.as_ref())?;
        self.logger.info(&format!(
            "Initializing document-store client for project {}",
            config.project_id()
        ));

        let calls = self
            .connector
            .connect(&config)
            .await
            .map_err(InitializationError::from)?;

        Ok(ClientHandle::new(config.project_id(), calls))
    }
}

#[async_trait]
impl ClientProvider for ClientBootstrapper {
    async fn get_client(&self) -> Result<ClientHandle, BootstrapError> {
        if let Some(cached) = self.cached() {
            return cached;
        }

        let _guard = self.init_lock.lock().await;
        // Another caller may have finished while we waited for the slot.
        if let Some(cached) = self.cached() {
            return cached;
        }

        self.set_slot(Slot::Initializing);
        let _initializing = InitializingGuard { slot: &self.slot };
        let result = self.initialize().await;
        match &result {
            Ok(handle) => {
                self.logger.info(&format!(
                    "Document-store client ready for project {}",
                    handle.project_id()
                ));
                self.set_slot(Slot::Ready(handle.clone()));
            }
            Err(err) => {
                self.logger
                    .error(&format!("Document-store client bootstrap failed: {}", err));
                self.set_slot(Slot::Failed(err.clone()));
            }
        }
        result
    }

    fn state(&self) -> BootstrapState {
        match &*self.slot.read().unwrap_or_else(PoisonError::into_inner) {
            Slot::Uninitialized => BootstrapState::Uninitialized,
            Slot::Initializing => BootstrapState::Initializing,
            Slot::Ready(_) => BootstrapState::Ready,
            Slot::Failed(_) => BootstrapState::Failed,
        }
    }
}
