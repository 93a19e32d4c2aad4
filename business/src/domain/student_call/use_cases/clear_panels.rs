use async_trait::async_trait;

use crate::domain::student_call::errors::StudentCallError;

#[async_trait]
pub trait ClearPanelsUseCase: Send + Sync {
    async fn execute(&self) -> Result<u64, StudentCallError>;
}
