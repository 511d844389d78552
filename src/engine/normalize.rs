//! Per-chunk token normalization: label stripping, marker spacing,
//! identifier classification, capitalization and company suffixes.

use super::company::normalize_company_suffixes;
use super::patterns::{char_at, char_before, is_ascii_word, is_list_label, WHOLE_ID, WS_RUN};
use super::rules::{apply_all, RewriteRule};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref NAME_LABEL: Regex =
        Regex::new(r"(?i)^\s*Name\s*#?\s*[0-9]+\s*[-:：–—]?\s*").expect("valid name label regex");
    static ref LIST_LABEL: Regex = Regex::new(r"^[0-9]{1,3}([.)）])(\s*)").expect("valid list label regex");
    static ref LEADING_MARKER: Regex =
        Regex::new(r"^(已故|故)\s*([A-Za-z\x{4E00}-\x{9FFF}])").expect("valid leading marker regex");
    static ref PAREN_CODE: Regex = Regex::new(r"\(([A-Za-z]{2,5})\)").expect("valid paren code regex");
    static ref WORD: Regex = Regex::new(r"[A-Za-z][A-Za-z']*").expect("valid word regex");
}

/// Cleanup applied before classification.
pub const CLEANUP_RULES: [RewriteRule; 3] = [
    RewriteRule::new("strip_labels", strip_labels),
    RewriteRule::new("tighten_marker", tighten_marker),
    RewriteRule::new("collapse_spaces", collapse_spaces),
];

/// Capitalization passes for non-identifier tokens.
pub const CAPITALIZE_RULES: [RewriteRule; 3] = [
    RewriteRule::new("upper_paren_codes", upper_paren_codes),
    RewriteRule::new("title_case_words", title_case_words),
    RewriteRule::new("normalize_company_suffixes", normalize_company_suffixes),
];

/// Normalize one chunk into a token. `None` means the chunk carried no
/// name (for instance a bare `Name #3:` label) and is discarded.
pub fn normalize_token(chunk: &str) -> Option<String> {
    let token = apply_all(&CLEANUP_RULES, chunk);
    if token.is_empty() {
        return None;
    }

    if WHOLE_ID.is_match(&token) {
        return Some(token.to_ascii_uppercase());
    }

    Some(apply_all(&CAPITALIZE_RULES, &token))
}

/// Drop a leading `Name #n:` ordinal and a `1)` / `2.` list number.
pub fn strip_labels(text: &str) -> String {
    let text = NAME_LABEL.replace(text, "");
    let text = text.trim();

    if let Some(label) = LIST_LABEL.captures(text) {
        let rest = &text[label[0].len()..];
        let is_label = match rest.chars().next() {
            None => true,
            Some(next) => is_list_label(&label[1], &label[2], next),
        };
        if is_label {
            return rest.trim().to_string();
        }
    }

    text.to_string()
}

/// Exactly one space after a leading deceased marker.
pub fn tighten_marker(text: &str) -> String {
    LEADING_MARKER.replace(text, "$1 $2").into_owned()
}

pub fn collapse_spaces(text: &str) -> String {
    WS_RUN.replace_all(text, " ").trim().to_string()
}

/// `(sm)` becomes `(SM)`.
pub fn upper_paren_codes(text: &str) -> String {
    PAREN_CODE
        .replace_all(text, |caps: &Captures| format!("({})", caps[1].to_ascii_uppercase()))
        .into_owned()
}

/// Title-case ASCII words, keeping 2-5 letter all-caps acronyms.
pub fn title_case_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut from = 0;

    for word in WORD.find_iter(text) {
        let glued = char_before(text, word.start()).is_some_and(is_ascii_word)
            || char_at(text, word.end()).is_some_and(is_ascii_word);
        if glued {
            continue;
        }
        out.push_str(&text[from..word.start()]);
        out.push_str(&capitalize_word(word.as_str()));
        from = word.end();
    }

    out.push_str(&text[from..]);
    out
}

fn is_acronym(word: &str) -> bool {
    (2..=5).contains(&word.len()) && word.bytes().all(|b| b.is_ascii_uppercase())
}

fn capitalize_word(word: &str) -> String {
    if is_acronym(word) {
        return word.to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = first.to_ascii_uppercase().to_string();
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}
