use std::collections::BTreeMap;

use business::domain::student_call::model::StudentCall;

use crate::wire::{Document, FieldTransform, Value, Write};

/// Field the panels order and expire calls by.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Firestore representation of a call. Field names are the ones the panel
/// pages read.
pub struct StudentCallEntity {
    pub name: String,
    pub student_id: String,
    pub full_name: String,
    pub class_name: String,
    pub photo_url: Option<String>,
}

impl StudentCallEntity {
    pub fn from_domain(name: String, call: &StudentCall) -> Self {
        Self {
            name,
            student_id: call.student_id.clone(),
            full_name: call.full_name.clone(),
            class_name: call.class_name.clone(),
            photo_url: call.photo_url.clone(),
        }
    }

    /// Create write with the timestamp stamped by the server.
    pub fn into_write(self) -> Write {
        let mut fields = BTreeMap::new();
        fields.insert("id".to_string(), Value::StringValue(self.student_id));
        fields.insert("nomeCompleto".to_string(), Value::StringValue(self.full_name));
        fields.insert("turma".to_string(), Value::StringValue(self.class_name));
        fields.insert(
            "fotoUrl".to_string(),
            self.photo_url.map(Value::StringValue).unwrap_or(Value::NullValue(())),
        );

        Write::update(
            Document {
                name: self.name,
                fields,
            },
            vec![FieldTransform::request_time(TIMESTAMP_FIELD)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_build_write_with_server_timestamp_transform() {
        let call = StudentCall::new(
            "1042".to_string(),
            "Ana Souza".to_string(),
            "EI-2B".to_string(),
            None,
        )
        .unwrap();

        let write = StudentCallEntity::from_domain("projects/p/doc".to_string(), &call).into_write();

        assert_eq!(
            serde_json::to_value(write).unwrap(),
            json!({
                "update": {
                    "name": "projects/p/doc",
                    "fields": {
                        "fotoUrl": { "nullValue": null },
                        "id": { "stringValue": "1042" },
                        "nomeCompleto": { "stringValue": "Ana Souza" },
                        "turma": { "stringValue": "EI-2B" }
                    }
                },
                "updateTransforms": [
                    { "fieldPath": "timestamp", "setToServerValue": "REQUEST_TIME" }
                ]
            })
        );
    }
}
