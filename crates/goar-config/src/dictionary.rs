use std::env;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Extra dictionary JSON files merged over the embedded data
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl DictionaryConfig {
    /// Reads GOAR_EXTRA_DICTS, a colon-separated list of JSON paths
    pub fn new() -> Self {
        let additional_paths = env::var("GOAR_EXTRA_DICTS")
            .map(|v| {
                v.split(':')
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self { additional_paths }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            additional_paths: vec![],
        }
    }
}
