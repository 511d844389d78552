//! Property tests for the splitting pipeline.

use namesplit::engine::patterns::WHOLE_ID;
use namesplit::engine::{split_names, to_multiline, SplitOptions};
use proptest::prelude::*;
use std::collections::HashSet;

const MESSY: &str = "[a-zA-Z0-9 ,/;|故已李王陈成兴\n()#.:-]{0,80}";

const GIVEN: &[&str] = &["John", "Mary", "Tan", "Lim", "Wei", "Ahmad", "Siti", "Kumar", "Chen", "Abdul"];
const HAN: &[&str] = &["李成兴", "李茹茵", "陈", "王大明", "故", "已故 王大明"];
const IDS: &[&str] = &["S1234567A", "T7654321Z", "F0000001K", "G9876543X"];

fn keep_duplicates() -> SplitOptions {
    SplitOptions {
        deduplicate: false,
        ..SplitOptions::default()
    }
}

fn clean_entry() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec(prop::sample::select(GIVEN), 1..4).prop_map(|words| words.join(" ")),
        prop::sample::select(HAN).prop_map(str::to_string),
        prop::sample::select(IDS).prop_map(str::to_string),
    ]
}

proptest! {
    #[test]
    fn tokens_are_never_blank_or_padded(raw in MESSY) {
        for options in [SplitOptions::default(), SplitOptions { trim_whitespace: false, ..SplitOptions::default() }] {
            for token in split_names(&raw, &options) {
                prop_assert!(!token.is_empty());
                prop_assert_eq!(token.trim(), token.as_str());
            }
        }
    }

    #[test]
    fn identifiers_come_out_upper_case(raw in MESSY) {
        for token in split_names(&raw, &SplitOptions::default()) {
            if WHOLE_ID.is_match(&token) {
                prop_assert_eq!(token.to_ascii_uppercase(), token);
            }
        }
    }

    #[test]
    fn dedupe_keeps_first_occurrences(raw in MESSY) {
        let all = split_names(&raw, &keep_duplicates());
        let mut seen = HashSet::new();
        let expected: Vec<String> = all
            .into_iter()
            .filter(|token| seen.insert(token.to_ascii_lowercase()))
            .collect();

        prop_assert_eq!(split_names(&raw, &SplitOptions::default()), expected);
    }

    #[test]
    fn clean_lists_survive_a_second_split(entries in prop::collection::vec(clean_entry(), 1..8)) {
        let pasted = entries.join(", ");
        let first = split_names(&pasted, &keep_duplicates());
        prop_assert_eq!(&first, &entries);

        let second = split_names(&to_multiline(&first), &keep_duplicates());
        prop_assert_eq!(second, first);
    }

    #[test]
    fn arbitrary_text_does_not_panic(raw in "\\PC{0,120}") {
        let _ = split_names(&raw, &SplitOptions::default());
    }
}
