use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::bootstrap::client::ClientProvider;
use crate::domain::logger::Logger;
use crate::domain::student_call::errors::StudentCallError;
use crate::domain::student_call::panel::Panel;
use crate::domain::student_call::use_cases::purge_expired::{
    PurgeExpiredCallsParams, PurgeExpiredCallsUseCase,
};

pub struct PurgeExpiredCallsUseCaseImpl {
    pub clients: Arc<dyn ClientProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PurgeExpiredCallsUseCase for PurgeExpiredCallsUseCaseImpl {
    async fn execute(&self, params: PurgeExpiredCallsParams) -> Result<u64, StudentCallError> {
        let client = self.clients.get_client().await?;
        let cutoff = Utc::now() - params.max_age;

        let mut total = 0;
        for panel in Panel::ALL {
            // Keep sweeping the remaining panels when one fails.
            match client.calls().delete_older_than(panel, cutoff).await {
                Ok(0) => {}
                Ok(count) => {
                    self.logger.info(&format!(
                        "Removed {} expired calls from {}",
                        count,
                        panel.collection()
                    ));
                    total += count;
                }
                Err(err) => self.logger.error(&format!(
                    "Failed to purge {}: {}",
                    panel.collection(),
                    err
                )),
            }
        }

        if total > 0 {
            self.logger
                .info(&format!("Cleanup cycle removed {} calls in total", total));
        }
        Ok(total)
    }
}
