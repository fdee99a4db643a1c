pub mod dictionary;
pub mod grammar;
pub mod loader;
pub mod phrases;
pub mod resolver;
pub mod suffix;

pub use dictionary::BanjaraDictionary;
pub use grammar::GrammarTable;
pub use loader::BanjaraDictLoader;
pub use phrases::{PhraseBook, PhraseMatch};
pub use resolver::BanjaraResolver;
pub use suffix::EnglishSuffixRules;
