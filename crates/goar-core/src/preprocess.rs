use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default English preprocessor
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        // Fold newlines into spaces, then lowercase for lookup
        text = text.replace(['\n', '\r'], " ").trim().to_lowercase();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        let pre = DefaultPreprocessor;
        assert_eq!(pre.process("  Good Morning  "), "good morning");
    }

    #[test]
    fn empty_stays_empty() {
        let pre = DefaultPreprocessor;
        assert_eq!(pre.process("   "), "");
    }

    #[test]
    fn newlines_become_spaces() {
        let pre = DefaultPreprocessor;
        assert_eq!(pre.process("good\nmorning"), "good morning");
    }
}
