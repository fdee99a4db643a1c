use serde_json::{Value, json};

use crate::{CorpusSink, UploadError};

/// Thin client for the Firestore REST commit endpoint
#[derive(Clone)]
pub struct FirestoreClient {
    base_url: String,
    client: reqwest::Client,
}

impl FirestoreClient {
    pub fn new(project_id: &str) -> Self {
        Self::with_base_url(format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)",
            project_id
        ))
    }

    /// Point at an arbitrary base URL (local emulator, tests)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl CorpusSink for FirestoreClient {
    fn documents_root(&self) -> String {
        format!("{}/documents", self.base_url)
    }

    async fn commit(&self, writes: Vec<Value>) -> Result<(), UploadError> {
        let response = self
            .client
            .post(format!("{}/documents:commit", self.base_url))
            .json(&json!({ "writes": writes }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Api(format!("HTTP {}: {}", status, body)));
        }

        Ok(())
    }
}
