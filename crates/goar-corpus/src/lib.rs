mod client;
mod records;

pub use client::FirestoreClient;
pub use records::{SentenceRecord, load_records};

use std::time::Duration;

use goar_config::corpus::CorpusConfig;
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Document store error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid sentence records: {0}")]
    InvalidRecords(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for batched corpus writes
#[async_trait::async_trait]
pub trait CorpusSink: Send + Sync {
    /// Root path that document names are built against
    fn documents_root(&self) -> String;

    /// Commit one batch of writes atomically
    async fn commit(&self, writes: Vec<Value>) -> Result<(), UploadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSummary {
    pub sentences: usize,
    pub batches: usize,
}

/// One-shot batch upload of the sentence corpus. Shares nothing with the
/// resolver: no dictionaries, no grammar, only sentence records.
pub async fn upload_corpus<S: CorpusSink>(
    sink: &S,
    config: &CorpusConfig,
    records: &[SentenceRecord],
) -> Result<UploadSummary, UploadError> {
    let root = sink.documents_root();
    let batch_size = config.batch_size.max(1);
    let batches = records.len().div_ceil(batch_size);

    for (index, chunk) in records.chunks(batch_size).enumerate() {
        tracing::info!(
            "Batch {}/{}: uploading {} sentences",
            index + 1,
            batches,
            chunk.len()
        );

        let writes = chunk
            .iter()
            .map(|record| record.to_write(&root, &config.collection))
            .collect();
        sink.commit(writes).await?;

        // Pause between batches to stay under rate limits
        if index + 1 < batches {
            tokio::time::sleep(Duration::from_millis(config.batch_pause_ms)).await;
        }
    }

    tracing::info!("Initializing global stats document");
    sink.commit(vec![stats_write(&root, records.len())]).await?;

    Ok(UploadSummary {
        sentences: records.len(),
        batches,
    })
}

/// Global counters the crowdsourcing surface reads on load
fn stats_write(documents_root: &str, total_sentences: usize) -> Value {
    json!({
        "update": {
            "name": format!("{}/stats/global", documents_root),
            "fields": {
                "totalSentences": { "integerValue": total_sentences.to_string() },
                "totalTranslations": { "integerValue": "0" },
                "totalUsers": { "integerValue": "0" }
            }
        },
        "updateTransforms": [
            { "fieldPath": "lastUpdated", "setToServerValue": "REQUEST_TIME" }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Sink that records batch sizes instead of touching the network
    struct RecordingSink {
        batches: Mutex<Vec<Vec<Value>>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                batches: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl CorpusSink for RecordingSink {
        fn documents_root(&self) -> String {
            "test-root".to_string()
        }

        async fn commit(&self, writes: Vec<Value>) -> Result<(), UploadError> {
            self.batches.lock().unwrap().push(writes);
            Ok(())
        }
    }

    fn records(count: u64) -> Vec<SentenceRecord> {
        (1..=count)
            .map(|id| SentenceRecord {
                id,
                text: format!("sentence {}", id),
                category: "test".to_string(),
                difficulty: "easy".to_string(),
            })
            .collect()
    }

    fn config(batch_size: usize) -> CorpusConfig {
        CorpusConfig {
            batch_size,
            batch_pause_ms: 0,
            ..CorpusConfig::default()
        }
    }

    #[tokio::test]
    async fn splits_records_into_fixed_size_batches() {
        let sink = RecordingSink::new();
        let summary = upload_corpus(&sink, &config(2), &records(5)).await.expect("upload");

        assert_eq!(summary, UploadSummary { sentences: 5, batches: 3 });

        let batches = sink.batches.lock().unwrap();
        // Three sentence batches plus the stats commit
        assert_eq!(batches.len(), 4);
        assert_eq!(batches[0].len(), 2);
        assert_eq!(batches[2].len(), 1);
        assert_eq!(batches[3].len(), 1);
    }

    #[tokio::test]
    async fn stats_document_carries_totals() {
        let sink = RecordingSink::new();
        upload_corpus(&sink, &config(10), &records(3)).await.expect("upload");

        let batches = sink.batches.lock().unwrap();
        let stats = &batches.last().unwrap()[0];
        assert_eq!(stats["update"]["name"], "test-root/stats/global");
        assert_eq!(stats["update"]["fields"]["totalSentences"]["integerValue"], "3");
        assert_eq!(stats["update"]["fields"]["totalTranslations"]["integerValue"], "0");
    }

    #[tokio::test]
    async fn empty_corpus_still_writes_stats() {
        let sink = RecordingSink::new();
        let summary = upload_corpus(&sink, &config(500), &[]).await.expect("upload");
        assert_eq!(summary, UploadSummary { sentences: 0, batches: 0 });

        let batches = sink.batches.lock().unwrap();
        assert_eq!(batches.len(), 1);
    }
}
