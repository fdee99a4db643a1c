use std::env;

use serde::{Deserialize, Serialize};

fn default_project_id() -> String {
    "banjaraai".to_string()
}

fn default_collection() -> String {
    "sentences".to_string()
}

fn default_batch_size() -> usize {
    // Firestore caps a single commit at 500 writes
    500
}

fn default_batch_pause_ms() -> u64 {
    1000
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CorpusConfig {
    #[serde(default = "default_project_id")]
    pub project_id: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Pause between batches to stay under rate limits
    #[serde(default = "default_batch_pause_ms")]
    pub batch_pause_ms: u64,
}

impl CorpusConfig {
    pub fn new() -> Self {
        let project_id = env::var("GOAR_FIRESTORE_PROJECT").unwrap_or_else(|_| default_project_id());

        let batch_size = env::var("GOAR_BATCH_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_batch_size);

        Self {
            project_id,
            collection: default_collection(),
            batch_size,
            batch_pause_ms: default_batch_pause_ms(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            project_id: default_project_id(),
            collection: default_collection(),
            batch_size: default_batch_size(),
            batch_pause_ms: default_batch_pause_ms(),
        }
    }
}
