use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::bootstrap::client::ClientProvider;
use crate::domain::logger::Logger;
use crate::domain::student_call::errors::StudentCallError;
use crate::domain::student_call::panel::Panel;
use crate::domain::student_call::use_cases::clear_panels::ClearPanelsUseCase;

pub struct ClearPanelsUseCaseImpl {
    pub clients: Arc<dyn ClientProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearPanelsUseCase for ClearPanelsUseCaseImpl {
    async fn execute(&self) -> Result<u64, StudentCallError> {
        self.logger.info("Clearing all call panels");
        let client = self.clients.get_client().await?;

        let mut total = 0;
        for panel in Panel::ALL {
            total += client.calls().delete_all(panel).await?;
        }

        self.logger
            .info(&format!("Cleared {} calls from all panels", total));
        Ok(total)
    }
}
