//! Corporate entity suffix normalization.

use super::patterns::{char_at, find_bounded};
use lazy_static::lazy_static;
use regex::Regex;

/// One suffix rewrite: the first bounded occurrence of `pattern` becomes
/// `canonical`. With `eats_dot` a directly following `.` is dropped too.
pub struct SuffixRule {
    pattern: Regex,
    canonical: &'static str,
    eats_dot: bool,
}

impl SuffixRule {
    fn new(pattern: &str, canonical: &'static str, eats_dot: bool) -> Self {
        Self {
            pattern: Regex::new(&format!("(?i){pattern}")).expect("valid suffix regex"),
            canonical,
            eats_dot,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let Some(found) = find_bounded(&self.pattern, text).into_iter().next() else {
            return text.to_string();
        };

        let mut end = found.end;
        if self.eats_dot && char_at(text, end) == Some('.') {
            end += 1;
        }

        format!("{}{}{}", &text[..found.start], self.canonical, &text[end..])
    }
}

lazy_static! {
    pub static ref SUFFIX_RULES: Vec<SuffixRule> = vec![
        SuffixRule::new(r"pte(?:\s*\.\s*|\s+)ltd", "Pte Ltd", false),
        SuffixRule::new("ltd", "Ltd", false),
        SuffixRule::new("llp", "LLP", false),
        SuffixRule::new("plc", "PLC", false),
        SuffixRule::new("llc", "LLC", false),
        SuffixRule::new("inc", "Inc", true),
        SuffixRule::new("co", "Co", true),
        SuffixRule::new("limited", "Limited", false),
        SuffixRule::new("bhd", "Bhd", false),
    ];
}

/// Apply every suffix rule once, in order, to the evolving string.
pub fn normalize_company_suffixes(text: &str) -> String {
    SUFFIX_RULES
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}
