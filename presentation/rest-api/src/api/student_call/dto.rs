use poem_openapi::Object;

use business::domain::student_call::panel::Panel;
use business::domain::student_call::use_cases::call_student::CallStudentParams;

/// Student selected on the terminal. Field names match the terminal page.
#[derive(Debug, Clone, Object)]
pub struct CallStudentRequest {
    /// Student code in the school system
    pub id: String,
    /// Full name shown on the panel (cannot be empty)
    #[oai(rename = "nomeCompleto")]
    pub full_name: String,
    /// Class description, used to pick the panel
    #[oai(rename = "turma", default)]
    pub class_name: String,
    /// Optional photo (URL or data URI)
    #[oai(rename = "fotoUrl", skip_serializing_if_is_none)]
    pub photo_url: Option<String>,
}

impl From<CallStudentRequest> for CallStudentParams {
    fn from(request: CallStudentRequest) -> Self {
        Self {
            student_id: request.id,
            full_name: request.full_name,
            class_name: request.class_name,
            photo_url: request.photo_url,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CallStudentResponse {
    /// Panel the call was published to
    pub panel: String,
    /// Collection backing that panel
    pub collection: String,
}

impl From<Panel> for CallStudentResponse {
    fn from(panel: Panel) -> Self {
        let name = match panel {
            Panel::Infantil => "infantil",
            Panel::Fundamental => "fundamental",
            Panel::General => "general",
        };
        Self {
            panel: name.to_string(),
            collection: panel.collection().to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ClearPanelsResponse {
    /// Number of calls removed
    pub count: u64,
}
