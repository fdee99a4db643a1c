use std::path::Path;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::UploadError;

/// One crowdsourcing sentence, as stored in the corpus JSON file
#[derive(Debug, Clone, Deserialize)]
pub struct SentenceRecord {
    pub id: u64,
    pub text: String,
    pub category: String,
    pub difficulty: String,
}

impl SentenceRecord {
    /// Firestore write for this sentence: the document fields plus a
    /// server-timestamp transform for createdAt. Tracking fields start
    /// empty so the crowdsourcing surface can claim sentences later.
    pub fn to_write(&self, documents_root: &str, collection: &str) -> Value {
        json!({
            "update": {
                "name": format!("{}/{}/{}", documents_root, collection, self.id),
                "fields": {
                    "id": { "integerValue": self.id.to_string() },
                    "english": { "stringValue": self.text },
                    "category": { "stringValue": self.category },
                    "difficulty": { "stringValue": self.difficulty },
                    "assignedTo": { "arrayValue": {} },
                    "completedBy": { "integerValue": "0" }
                }
            },
            "updateTransforms": [
                { "fieldPath": "createdAt", "setToServerValue": "REQUEST_TIME" }
            ]
        })
    }
}

/// Load sentence records from a JSON array file
pub fn load_records(path: &Path) -> Result<Vec<SentenceRecord>, UploadError> {
    let json = std::fs::read_to_string(path)?;
    let records: Vec<SentenceRecord> =
        serde_json::from_str(&json).map_err(|e| UploadError::InvalidRecords(e.to_string()))?;
    tracing::info!("Loaded {} sentences from {}", records.len(), path.display());
    Ok(records)
}
