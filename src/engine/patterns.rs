//! Shared pattern set for the splitting pipeline.
//!
//! Identifier grammar, deceased markers, Han character ranges and the
//! ASCII word-boundary helpers used by every stage. Boundaries are ASCII
//! (`[A-Za-z0-9_]`), so a Han character next to a Latin run counts as a
//! boundary while a digit next to a letter does not.

use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

/// Deceased markers, longest first so `已故` wins over its suffix `故`.
pub const MARKERS: [&str; 2] = ["已故", "故"];

lazy_static! {
    /// Strict Singapore-style ID first, lax fallback second.
    pub static ref ID_TOKEN: Regex =
        Regex::new(r"[STFGM][0-9]{7}[A-Z]|[A-Za-z][0-9]{6,8}[A-Za-z]").expect("valid id regex");

    /// The identifier grammar anchored to the whole string.
    pub static ref WHOLE_ID: Regex =
        Regex::new(r"^(?:[STFGM][0-9]{7}[A-Z]|[A-Za-z][0-9]{6,8}[A-Za-z])$")
            .expect("valid whole id regex");

    /// `Name #12 -` style ordinal marker. Digits are required.
    pub static ref NAME_ORDINAL: Regex =
        Regex::new(r"Name\s*#?\s*[0-9]+\s*[-:：–—]?").expect("valid name ordinal regex");

    /// Runs of two or more whitespace characters.
    pub static ref WS_RUN: Regex = Regex::new(r"\s{2,}").expect("valid whitespace regex");
}

/// Han ideographs as matched by the pipeline (CJK Unified Ideographs block).
pub fn is_han(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Latin or Han letter: what may follow a marker or a list number.
pub fn is_name_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || is_han(c)
}

/// Whether a list number ending in `punct`, then `gap`, then `next` labels a
/// list entry. `7.Eleven` is a name; `7. Eleven`, `7.李` and `7)Eleven` are
/// labels.
pub fn is_list_label(punct: &str, gap: &str, next: char) -> bool {
    is_name_letter(next) && !(punct == "." && gap.is_empty() && next.is_ascii_alphabetic())
}

pub fn is_ascii_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn is_marker(run: &str) -> bool {
    MARKERS.contains(&run)
}

pub fn char_before(text: &str, at: usize) -> Option<char> {
    text[..at].chars().next_back()
}

pub fn char_at(text: &str, at: usize) -> Option<char> {
    text[at..].chars().next()
}

/// True when `text[start..end]` is not glued to ASCII word characters.
pub fn has_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    !char_before(text, start).is_some_and(is_ascii_word) && !char_at(text, end).is_some_and(is_ascii_word)
}

/// All non-overlapping matches of `re` that sit on ASCII word boundaries.
///
/// A candidate that fails the boundary test is skipped one character at a
/// time, so a valid match starting inside it is still found.
pub fn find_bounded(re: &Regex, text: &str) -> Vec<Range<usize>> {
    let mut found = Vec::new();
    let mut at = 0;

    while at < text.len() {
        let Some(m) = re.find_at(text, at) else {
            break;
        };

        if has_word_boundaries(text, m.start(), m.end()) {
            found.push(m.range());
            at = m.end();
        } else {
            at = m.start() + char_at(text, m.start()).map_or(1, char::len_utf8);
        }
    }

    found
}

/// Byte offset where the Han run ending at `end` starts.
pub fn han_run_start(text: &str, end: usize) -> usize {
    text[..end]
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_han(c))
        .last()
        .map_or(end, |(idx, _)| idx)
}

/// Full-width space to ASCII, collapse whitespace runs, trim.
pub fn normalise_spaces(text: &str) -> String {
    let text = text.replace('\u{3000}', " ");
    WS_RUN.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_and_lax_ids() {
        assert!(WHOLE_ID.is_match("S1234567A"));
        assert!(WHOLE_ID.is_match("t1234567b"));
        assert!(WHOLE_ID.is_match("X123456Y"));
        assert!(WHOLE_ID.is_match("X12345678Y"));
        assert!(!WHOLE_ID.is_match("X12345Y"));
        assert!(!WHOLE_ID.is_match("X123456789Y"));
        assert!(!WHOLE_ID.is_match("S1234567A John"));
    }

    #[test]
    fn test_find_bounded_rejects_glued_ids() {
        assert!(find_bounded(&ID_TOKEN, "XS1234567A").is_empty());
        assert!(find_bounded(&ID_TOKEN, "S1234567A9").is_empty());
        assert!(find_bounded(&ID_TOKEN, "_S1234567A").is_empty());
    }

    #[test]
    fn test_find_bounded_treats_han_as_boundary() {
        let text = "陈S1234567A李";
        let found = find_bounded(&ID_TOKEN, text);
        assert_eq!(found.len(), 1);
        assert_eq!(&text[found[0].clone()], "S1234567A");
    }

    #[test]
    fn test_find_bounded_multiple() {
        let text = "S1234567A John F7654321B";
        let found: Vec<&str> = find_bounded(&ID_TOKEN, text)
            .into_iter()
            .map(|r| &text[r])
            .collect();
        assert_eq!(found, vec!["S1234567A", "F7654321B"]);
    }

    #[test]
    fn test_han_run_start() {
        let text = "John 已故";
        assert_eq!(&text[han_run_start(text, text.len())..], "已故");
        assert_eq!(han_run_start("abc", 3), 3);
    }

    #[test]
    fn test_normalise_spaces() {
        assert_eq!(normalise_spaces("  John\u{3000}\u{3000}Tan  "), "John Tan");
        assert_eq!(normalise_spaces("a\tb"), "a\tb");
    }

    #[test]
    fn test_is_marker() {
        assert!(is_marker("故"));
        assert!(is_marker("已故"));
        assert!(!is_marker("王"));
    }

    #[test]
    fn test_is_list_label() {
        assert!(is_list_label(")", "", 'J'));
        assert!(is_list_label(".", " ", 'J'));
        assert!(is_list_label(".", "", '李'));
        assert!(!is_list_label(".", "", 'E'));
        assert!(!is_list_label(")", "", '('));
    }
}
