use std::env;

use serde::{Deserialize, Serialize};

use self::corpus::CorpusConfig;
use self::dictionary::DictionaryConfig;

pub mod corpus;
pub mod dictionary;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub corpus: CorpusConfig,

    /// Artificial delay applied around a translation request for UX
    /// pacing. Presentation concern only; the resolver never waits.
    pub pacing_ms: u64,
}

impl Config {
    pub fn new() -> Self {
        let pacing_ms = env::var("GOAR_PACING_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300); // matches the original surface's delay

        Config {
            dictionary: DictionaryConfig::new(),
            corpus: CorpusConfig::new(),
            pacing_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
