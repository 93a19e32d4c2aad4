use super::errors::StudentCallError;
use super::panel::Panel;

/// A request to show a student on a pickup panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentCall {
    pub student_id: String,
    pub full_name: String,
    pub class_name: String,
    pub photo_url: Option<String>,
}

impl StudentCall {
    pub fn new(
        student_id: String,
        full_name: String,
        class_name: String,
        photo_url: Option<String>,
    ) -> Result<Self, StudentCallError> {
        if full_name.trim().is_empty() {
            return Err(StudentCallError::NameEmpty);
        }

        Ok(Self {
            student_id,
            full_name,
            class_name,
            photo_url: photo_url.filter(|url| !url.trim().is_empty()),
        })
    }

    pub fn panel(&self) -> Panel {
        Panel::for_class(&self.class_name)
    }
}
