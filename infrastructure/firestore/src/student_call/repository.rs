use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::student_call::model::StudentCall;
use business::domain::student_call::panel::Panel;
use business::domain::student_call::repository::StudentCallRepository;

use crate::client::FirestoreClient;
use crate::wire::{
    CommitRequest, FieldFilter, FieldReference, Filter, RunQueryRequest, RunQueryResponse,
    StructuredQuery, Value, Write,
};

use super::entity::{StudentCallEntity, TIMESTAMP_FIELD};

/// Firestore rejects commits above 500 writes; stay well below it.
pub const MAX_WRITES_PER_COMMIT: usize = 400;

pub struct StudentCallRepositoryFirestore {
    client: FirestoreClient,
}

impl StudentCallRepositoryFirestore {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    async fn commit(&self, writes: Vec<Write>) -> Result<(), RepositoryError> {
        let response = self
            .client
            .http
            .post(self.client.commit_url())
            .query(&[("key", self.client.api_key.as_str())])
            .json(&CommitRequest { writes })
            .send()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Firestore commit rejected");
            return Err(RepositoryError::Persistence);
        }
        Ok(())
    }

    async fn document_names(
        &self,
        panel: Panel,
        filter: Option<Filter>,
    ) -> Result<Vec<String>, RepositoryError> {
        let response = self
            .client
            .http
            .post(self.client.run_query_url())
            .query(&[("key", self.client.api_key.as_str())])
            .json(&RunQueryRequest {
                structured_query: StructuredQuery::names_in(panel.collection(), filter),
            })
            .send()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), collection = panel.collection(), "Firestore query rejected");
            return Err(RepositoryError::DatabaseError);
        }

        let rows: Vec<RunQueryResponse> = response
            .json()
            .await
            .map_err(|_| RepositoryError::InvalidResponse)?;

        Ok(rows
            .into_iter()
            .filter_map(|row| row.document.map(|doc| doc.name))
            .collect())
    }

    async fn delete_documents(&self, names: Vec<String>) -> Result<u64, RepositoryError> {
        let mut deleted = 0;
        for batch in names.chunks(MAX_WRITES_PER_COMMIT) {
            let writes = batch.iter().cloned().map(Write::delete).collect();
            if let Err(err) = self.commit(writes).await {
                if deleted > 0 {
                    tracing::warn!(
                        deleted,
                        remaining = names.len() as u64 - deleted,
                        "Delete interrupted after partial commit"
                    );
                }
                return Err(err);
            }
            deleted += batch.len() as u64;
        }
        Ok(deleted)
    }
}

#[async_trait]
impl StudentCallRepository for StudentCallRepositoryFirestore {
    async fn save(&self, panel: Panel, call: &StudentCall) -> Result<(), RepositoryError> {
        let name = self
            .client
            .document_name(panel.collection(), &Uuid::new_v4().simple().to_string());
        let write = StudentCallEntity::from_domain(name, call).into_write();

        self.commit(vec![write]).await
    }

    async fn delete_older_than(
        &self,
        panel: Panel,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, RepositoryError> {
        let filter = Filter {
            field_filter: FieldFilter {
                field: FieldReference::new(TIMESTAMP_FIELD),
                op: "LESS_THAN",
                value: Value::TimestampValue(cutoff.to_rfc3339_opts(SecondsFormat::Micros, true)),
            },
        };

        let names = self.document_names(panel, Some(filter)).await?;
        self.delete_documents(names).await
    }

    async fn delete_all(&self, panel: Panel) -> Result<u64, RepositoryError> {
        let names = self.document_names(panel, None).await?;
        self.delete_documents(names).await
    }
}
