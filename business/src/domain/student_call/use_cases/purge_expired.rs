use async_trait::async_trait;
use chrono::Duration;

use crate::domain::student_call::errors::StudentCallError;

pub struct PurgeExpiredCallsParams {
    pub max_age: Duration,
}

#[async_trait]
pub trait PurgeExpiredCallsUseCase: Send + Sync {
    async fn execute(&self, params: PurgeExpiredCallsParams) -> Result<u64, StudentCallError>;
}
