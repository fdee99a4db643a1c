use goar_core::language::{StrippedForm, SuffixRules};

/// English inflection stripping for dictionary fallback. Exactly one rule
/// applies per word, checked in fixed order: -ing, -ed, -s.
pub struct EnglishSuffixRules;

impl EnglishSuffixRules {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnglishSuffixRules {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixRules for EnglishSuffixRules {
    fn strip(&self, word: &str) -> Option<StrippedForm> {
        if let Some(base) = word.strip_suffix("ing") {
            return Some(StrippedForm {
                base: base.to_string(),
                marker: Some("raha".to_string()),
                rule: "progressive -ing".to_string(),
            });
        }

        if let Some(base) = word.strip_suffix("ed") {
            return Some(StrippedForm {
                base: base.to_string(),
                marker: Some("gaya".to_string()),
                rule: "past -ed".to_string(),
            });
        }

        // Plural: only for words long enough to have a stem ("is" stays "is")
        if word.chars().count() > 2 {
            if let Some(base) = word.strip_suffix('s') {
                return Some(StrippedForm {
                    base: base.to_string(),
                    marker: None,
                    rule: "plural -s".to_string(),
                });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progressive_carries_raha_marker() {
        let rules = EnglishSuffixRules::new();
        let form = rules.strip("walking").expect("rule applies");
        assert_eq!(form.base, "walk");
        assert_eq!(form.marker.as_deref(), Some("raha"));
    }

    #[test]
    fn past_carries_gaya_marker() {
        let rules = EnglishSuffixRules::new();
        let form = rules.strip("walked").expect("rule applies");
        assert_eq!(form.base, "walk");
        assert_eq!(form.marker.as_deref(), Some("gaya"));
    }

    #[test]
    fn plural_has_no_marker() {
        let rules = EnglishSuffixRules::new();
        let form = rules.strip("books").expect("rule applies");
        assert_eq!(form.base, "book");
        assert_eq!(form.marker, None);
    }

    #[test]
    fn short_s_words_are_left_alone() {
        let rules = EnglishSuffixRules::new();
        assert_eq!(rules.strip("is"), None);
        assert_eq!(rules.strip("as"), None);
    }

    #[test]
    fn ing_rule_is_checked_before_ed_and_s() {
        // "singing" must strip -ing, not -s
        let rules = EnglishSuffixRules::new();
        let form = rules.strip("singing").expect("rule applies");
        assert_eq!(form.base, "sing");
        assert_eq!(form.rule, "progressive -ing");
    }

    #[test]
    fn uninflected_words_do_not_strip() {
        let rules = EnglishSuffixRules::new();
        assert_eq!(rules.strip("pani"), None);
        assert_eq!(rules.strip("go"), None);
    }
}
