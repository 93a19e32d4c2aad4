//! Request and response bodies of the Firestore REST endpoints used here
//! (`documents:commit` and `documents:runQuery`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    StringValue(String),
    TimestampValue(String),
    NullValue(()),
}

#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub name: String,
    pub fields: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTransform {
    pub field_path: String,
    pub set_to_server_value: &'static str,
}

impl FieldTransform {
    pub fn request_time(field_path: &str) -> Self {
        Self {
            field_path: field_path.to_string(),
            set_to_server_value: "REQUEST_TIME",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Write {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub update_transforms: Vec<FieldTransform>,
}

impl Write {
    pub fn update(document: Document, transforms: Vec<FieldTransform>) -> Self {
        Self {
            update: Some(document),
            delete: None,
            update_transforms: transforms,
        }
    }

    pub fn delete(name: String) -> Self {
        Self {
            update: None,
            delete: Some(name),
            update_transforms: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommitRequest {
    pub writes: Vec<Write>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReference {
    pub field_path: String,
}

impl FieldReference {
    pub fn new(field_path: &str) -> Self {
        Self {
            field_path: field_path.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSelector {
    pub collection_id: String,
}

#[derive(Debug, Serialize)]
pub struct Projection {
    pub fields: Vec<FieldReference>,
}

#[derive(Debug, Serialize)]
pub struct FieldFilter {
    pub field: FieldReference,
    pub op: &'static str,
    pub value: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub field_filter: FieldFilter,
}

#[derive(Debug, Serialize)]
pub struct StructuredQuery {
    pub select: Projection,
    pub from: Vec<CollectionSelector>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
}

impl StructuredQuery {
    /// Selects only document names from `collection`, optionally filtered.
    pub fn names_in(collection: &str, filter: Option<Filter>) -> Self {
        Self {
            select: Projection {
                fields: vec![FieldReference::new("__name__")],
            },
            from: vec![CollectionSelector {
                collection_id: collection.to_string(),
            }],
            filter,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunQueryRequest {
    pub structured_query: StructuredQuery,
}

#[derive(Debug, Deserialize)]
pub struct DocumentName {
    pub name: String,
}

/// One element of the streamed `runQuery` response array. Elements without
/// a document only carry progress metadata.
#[derive(Debug, Deserialize)]
pub struct RunQueryResponse {
    pub document: Option<DocumentName>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_serialize_timestamp_filter_as_where_clause() {
        let query = StructuredQuery::names_in(
            "chamados_ei",
            Some(Filter {
                field_filter: FieldFilter {
                    field: FieldReference::new("timestamp"),
                    op: "LESS_THAN",
                    value: Value::TimestampValue("2025-03-01T12:00:00Z".to_string()),
                },
            }),
        );

        let body = serde_json::to_value(RunQueryRequest {
            structured_query: query,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "structuredQuery": {
                    "select": { "fields": [{ "fieldPath": "__name__" }] },
                    "from": [{ "collectionId": "chamados_ei" }],
                    "where": {
                        "fieldFilter": {
                            "field": { "fieldPath": "timestamp" },
                            "op": "LESS_THAN",
                            "value": { "timestampValue": "2025-03-01T12:00:00Z" }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn should_omit_where_clause_without_filter() {
        let body = serde_json::to_value(StructuredQuery::names_in("chamados", None)).unwrap();

        assert!(body.get("where").is_none());
    }

    #[test]
    fn should_serialize_delete_write_without_update_fields() {
        let body = serde_json::to_value(Write::delete("projects/p/x".to_string())).unwrap();

        assert_eq!(body, json!({ "delete": "projects/p/x" }));
    }

    #[test]
    fn should_serialize_null_value_as_firestore_null() {
        assert_eq!(
            serde_json::to_value(Value::NullValue(())).unwrap(),
            json!({ "nullValue": null })
        );
    }

    #[test]
    fn should_skip_progress_only_query_responses() {
        let raw = r#"[
            {"readTime": "2025-03-01T12:00:00Z"},
            {"document": {"name": "projects/p/databases/(default)/documents/chamados/a", "createTime": "x"}, "readTime": "y"}
        ]"#;

        let responses: Vec<RunQueryResponse> = serde_json::from_str(raw).unwrap();
        let names: Vec<String> = responses
            .into_iter()
            .filter_map(|r| r.document.map(|d| d.name))
            .collect();

        assert_eq!(
            names,
            vec!["projects/p/databases/(default)/documents/chamados/a".to_string()]
        );
    }
}
