use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::student_call::use_cases::call_student::CallStudentUseCase;
use business::domain::student_call::use_cases::clear_panels::ClearPanelsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::FirebaseBearer;
use crate::api::student_call::dto::{
    CallStudentRequest, CallStudentResponse, ClearPanelsResponse,
};
use crate::api::tags::ApiTags;

pub struct StudentCallApi {
    call_student_use_case: Arc<dyn CallStudentUseCase>,
    clear_panels_use_case: Arc<dyn ClearPanelsUseCase>,
}

impl StudentCallApi {
    pub fn new(
        call_student_use_case: Arc<dyn CallStudentUseCase>,
        clear_panels_use_case: Arc<dyn ClearPanelsUseCase>,
    ) -> Self {
        Self {
            call_student_use_case,
            clear_panels_use_case,
        }
    }
}

/// Student call API
///
/// Endpoints used by the reception terminal to publish calls and reset panels.
#[OpenApi]
impl StudentCallApi {
    /// Call a student
    ///
    /// Publishes the student on the panel matching their class. The panel
    /// pages pick the call up from the document store in real time.
    #[oai(path = "/api/calls", method = "post", tag = "ApiTags::StudentCalls")]
    async fn call_student(
        &self,
        auth: FirebaseBearer,
        body: Json<CallStudentRequest>,
    ) -> CallStudentApiResponse {
        tracing::debug!(caller = %auth.0, "Student call requested");

        match self.call_student_use_case.execute(body.0.into()).await {
            Ok(panel) => CallStudentApiResponse::Created(Json(panel.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CallStudentApiResponse::BadRequest(json),
                    503 => CallStudentApiResponse::ServiceUnavailable(json),
                    _ => CallStudentApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Clear all panels
    ///
    /// Removes every pending call from every panel.
    #[oai(path = "/api/panels", method = "delete", tag = "ApiTags::Panels")]
    async fn clear_panels(&self, auth: FirebaseBearer) -> ClearPanelsApiResponse {
        tracing::info!(caller = %auth.0, "Panel reset requested");

        match self.clear_panels_use_case.execute().await {
            Ok(count) => ClearPanelsApiResponse::Ok(Json(ClearPanelsResponse { count })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => ClearPanelsApiResponse::ServiceUnavailable(json),
                    _ => ClearPanelsApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CallStudentApiResponse {
    #[oai(status = 201)]
    Created(Json<CallStudentResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearPanelsApiResponse {
    #[oai(status = 200)]
    Ok(Json<ClearPanelsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
