pub mod dictionary;
pub mod language;
pub mod preprocess;
pub mod resolution;
