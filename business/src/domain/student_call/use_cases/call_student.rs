use async_trait::async_trait;

use crate::domain::student_call::errors::StudentCallError;
use crate::domain::student_call::panel::Panel;

#[derive(Debug, Clone)]
pub struct CallStudentParams {
    pub student_id: String,
    pub full_name: String,
    pub class_name: String,
    pub photo_url: Option<String>,
}

#[async_trait]
pub trait CallStudentUseCase: Send + Sync {
    async fn execute(&self, params: CallStudentParams) -> Result<Panel, StudentCallError>;
}
