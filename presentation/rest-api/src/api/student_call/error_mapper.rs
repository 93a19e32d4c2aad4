use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::student_call::errors::StudentCallError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for StudentCallError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            StudentCallError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "student_call.name_empty",
            ),
            StudentCallError::ClientUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "ServiceUnavailable",
                "student_call.client_unavailable",
            ),
            StudentCallError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        if status.is_server_error() {
            tracing::error!("Student call request failed: {}", self);
        }

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::bootstrap::errors::{BootstrapError, ConfigurationError};
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_empty_name_to_bad_request() {
        let (status, json) = StudentCallError::NameEmpty.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "student_call.name_empty");
    }

    #[test]
    fn should_map_bootstrap_failure_to_service_unavailable_without_details() {
        let err = StudentCallError::ClientUnavailable(BootstrapError::Configuration(
            ConfigurationError::PlaceholderField("apiKey"),
        ));

        let (status, json) = err.into_error_response();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!json.0.message.contains("apiKey"));
    }

    #[test]
    fn should_map_repository_failure_to_internal_error() {
        let (status, _) =
            StudentCallError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
