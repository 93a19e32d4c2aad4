use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::RepositoryError;

use super::model::StudentCall;
use super::panel::Panel;

#[async_trait]
pub trait StudentCallRepository: Send + Sync {
    /// Stores the call on `panel`; the write time is stamped by the store.
    async fn save(&self, panel: Panel, call: &StudentCall) -> Result<(), RepositoryError>;
    async fn delete_older_than(
        &self,
        panel: Panel,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, RepositoryError>;
    async fn delete_all(&self, panel: Panel) -> Result<u64, RepositoryError>;
}
