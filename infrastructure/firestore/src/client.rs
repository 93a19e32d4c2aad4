use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// HTTP client bound to one project's default database.
#[derive(Clone)]
pub struct FirestoreClient {
    pub http: Client,
    pub api_key: String,
    database_path: String,
    base_url: String,
}

impl FirestoreClient {
    pub fn new(http: Client, base_url: &str, project_id: &str, api_key: &str) -> Self {
        Self {
            http,
            api_key: api_key.to_string(),
            database_path: format!("projects/{}/databases/(default)", project_id),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resource name of a document, as used inside request bodies.
    pub fn document_name(&self, collection: &str, document_id: &str) -> String {
        format!(
            "{}/documents/{}/{}",
            self.database_path, collection, document_id
        )
    }

    /// Returns the batch write endpoint URL.
    pub fn commit_url(&self) -> String {
        format!("{}/{}/documents:commit", self.base_url, self.database_path)
    }

    /// Returns the structured query endpoint URL.
    pub fn run_query_url(&self) -> String {
        format!("{}/{}/documents:runQuery", self.base_url, self.database_path)
    }
}
