use crate::domain::bootstrap::errors::BootstrapError;
use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum StudentCallError {
    #[error("student_call.name_empty")]
    NameEmpty,
    #[error("student_call.client_unavailable")]
    ClientUnavailable(#[from] BootstrapError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
