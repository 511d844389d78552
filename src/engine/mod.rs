//! Name splitting pipeline.
//!
//! `preprocess` → `segment` → `normalize_token` per chunk → `dedupe`.
//! Every stage is a pure function over strings; options are passed in on
//! each call and nothing is kept between calls.

pub mod company;
pub mod config;
pub mod dedupe;
pub mod error;
pub mod normalize;
pub mod patterns;
pub mod preprocess;
pub mod rules;
pub mod segment;

pub use config::{Config, SplitOptions, UiConfig};
pub use dedupe::{dedupe, dedupe_key};
pub use normalize::normalize_token;
pub use preprocess::preprocess;
pub use segment::segment;

use tracing::{debug, warn};

/// Turn pasted text into an ordered list of names and IDs.
pub fn split_names(raw: &str, options: &SplitOptions) -> Vec<String> {
    let text = preprocess(raw);
    let tokens: Vec<String> = segment(&text, options.trim_whitespace)
        .iter()
        .filter_map(|chunk| normalize_token(chunk))
        .collect();

    let found = tokens.len();
    let names = dedupe(tokens, options.deduplicate);
    debug!(found, kept = names.len(), "split names");
    names
}

/// Byte-level entry point. Input that is not UTF-8 yields no names.
pub fn split_names_bytes(raw: &[u8], options: &SplitOptions) -> Vec<String> {
    match std::str::from_utf8(raw) {
        Ok(text) => split_names(text, options),
        Err(err) => {
            warn!(%err, "input is not valid UTF-8");
            Vec::new()
        }
    }
}

pub fn to_multiline(names: &[String]) -> String {
    names.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(raw: &str) -> Vec<String> {
        split_names(raw, &SplitOptions::default())
    }

    #[test]
    fn test_ids_isolated_in_order() {
        assert_eq!(
            split("S1234567A John Tan / F7654321B Mary Lim"),
            vec!["S1234567A", "John Tan", "F7654321B", "Mary Lim"]
        );
    }

    #[test]
    fn test_deceased_markers() {
        assert_eq!(
            split("故John Tan 故Mary Lim"),
            vec!["故 John Tan", "故 Mary Lim"]
        );
    }

    #[test]
    fn test_dedupe_ascii_case() {
        assert_eq!(split("John, john"), vec!["John"]);
        assert_eq!(split("陈, 陈"), vec!["陈"]);
    }

    #[test]
    fn test_dedupe_disabled() {
        let options = SplitOptions {
            deduplicate: false,
            ..SplitOptions::default()
        };
        assert_eq!(split_names("John, john", &options), vec!["John", "John"]);
    }

    #[test]
    fn test_acronyms() {
        assert_eq!(split("SM John (sm)"), vec!["SM John (SM)"]);
    }

    #[test]
    fn test_company_suffix() {
        assert_eq!(split("abc pte ltd"), vec!["Abc Pte Ltd"]);
    }

    #[test]
    fn test_form_label_removed() {
        assert_eq!(
            split("NRIC or UEN (for Tax Exemption purposes):\nS1234567A\njohn tan"),
            vec!["S1234567A", "John Tan"]
        );
    }

    #[test]
    fn test_han_names_split() {
        assert_eq!(
            split("李成兴 李茹茵、已故 王小明"),
            vec!["李成兴", "李茹茵", "已故 王小明"]
        );
    }

    #[test]
    fn test_numbered_list() {
        assert_eq!(
            split("1) john tan 2) mary lim 3) ABC co."),
            vec!["John Tan", "Mary Lim", "ABC Co"]
        );
    }

    #[test]
    fn test_numbers_inside_names() {
        assert_eq!(split("7.Eleven Pte Ltd"), vec!["7.Eleven Pte Ltd"]);
        assert_eq!(split("Tan (2) Lim"), vec!["Tan (2) Lim"]);
    }

    #[test]
    fn test_bare_marker_survives_resplit() {
        let options = SplitOptions {
            deduplicate: false,
            ..SplitOptions::default()
        };
        let first = split_names("故;成", &options);
        assert_eq!(first, vec!["故", "成"]);
        assert_eq!(split_names(&to_multiline(&first), &options), first);
    }

    #[test]
    fn test_repeated_marker() {
        assert_eq!(split("故故John"), vec!["故 故 John"]);
    }

    #[test]
    fn test_name_ordinals() {
        assert_eq!(
            split("Name#1 - john tan Name#2 - s1234567a"),
            vec!["John Tan", "S1234567A"]
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(split("").is_empty());
        assert!(split(" \r\n \n ,, / ").is_empty());
    }

    #[test]
    fn test_invalid_utf8_yields_nothing() {
        assert!(split_names_bytes(&[0xff, 0xfe, b'J'], &SplitOptions::default()).is_empty());
        assert_eq!(
            split_names_bytes("john".as_bytes(), &SplitOptions::default()),
            vec!["John"]
        );
    }

    #[test]
    fn test_to_multiline() {
        let names = vec!["John".to_string(), "Mary".to_string()];
        assert_eq!(to_multiline(&names), "John\nMary");
        assert_eq!(to_multiline(&[]), "");
    }
}
