/// Word lookup operations over a loaded dictionary
pub trait WordLookup: Send + Sync {
    /// Translation for an exact lowercase headword
    fn lookup_exact(&self, word: &str) -> Option<&str>;

    /// Number of entries currently loaded
    fn entry_count(&self) -> usize;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub source_language: String,
    pub target_language: String,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
