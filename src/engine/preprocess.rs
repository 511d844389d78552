//! Preprocessing of raw pasted text.
//!
//! Removes form-label lines, normalizes line endings and blank lines, and
//! inserts line breaks where one pasted line holds several people: before
//! numbered-list markers, before deceased markers and between adjacent Han
//! names.

use super::patterns::{char_at, char_before, han_run_start, is_han, is_list_label, is_marker, is_name_letter};
use super::rules::{apply_all, RewriteRule};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref FORM_LABEL_STRICT: Regex = Regex::new(
        r"(?i)^\s*(?:NRIC|FIN)\s*or\s*UEN(?:\s*\(\s*for\s*Tax\s*Exemption\s*purposes\s*\))?\s*[:：]\s*$"
    )
    .expect("valid form label regex");
    static ref FORM_LABEL_LOOSE: Regex =
        Regex::new(r"(?i)^\s*(?:NRIC|FIN|UEN)[^:：]*[:：]\s*$").expect("valid loose label regex");
    static ref BLANK_RUN: Regex = Regex::new(r"\n{3,}").expect("valid blank line regex");
    static ref MARKER_COLON: Regex =
        Regex::new(r"(已故|故)[^\S\n]*[:：][^\S\n]*").expect("valid marker colon regex");
    static ref LIST_NUMBER: Regex =
        Regex::new(r"[0-9]{1,3}([.)）])([^\S\n]*)([A-Za-z\x{4E00}-\x{9FFF}])").expect("valid list number regex");
    static ref MARKER_BREAK: Regex =
        Regex::new(r"\s*(已故|故)[^\S\n]*([A-Za-z\x{4E00}-\x{9FFF}])").expect("valid marker break regex");
    static ref HAN_GAP: Regex = Regex::new(r"[\x{4E00}-\x{9FFF}](\s+)").expect("valid han gap regex");
    static ref MARKER_RUN: Regex = Regex::new(r"(已故|故)[^\S\n]*").expect("valid marker run regex");
}

/// Preprocessing steps, in application order.
pub const PREPROCESS_RULES: [RewriteRule; 8] = [
    RewriteRule::new("normalize_line_endings", normalize_line_endings),
    RewriteRule::new("strip_form_labels", strip_form_labels),
    RewriteRule::new("collapse_blank_lines", collapse_blank_lines),
    RewriteRule::new("canonicalize_marker_colon", canonicalize_marker_colon),
    RewriteRule::new("break_before_list_numbers", break_before_list_numbers),
    RewriteRule::new("break_before_markers", break_before_markers),
    RewriteRule::new("break_between_han_names", break_between_han_names),
    RewriteRule::new("space_after_markers", space_after_markers),
];

/// Prepare raw pasted text for segmentation.
///
/// Safe on clean input: with no labels or markers present this is line
/// ending normalization, blank-line collapsing and a trim.
pub fn preprocess(raw: &str) -> String {
    apply_all(&PREPROCESS_RULES, raw)
}

pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Blank out lines that are only a form label such as
/// `NRIC or UEN (for Tax Exemption purposes):`.
pub fn strip_form_labels(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if FORM_LABEL_STRICT.is_match(line) || FORM_LABEL_LOOSE.is_match(line) {
                ""
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN.replace_all(text, "\n\n").trim().to_string()
}

/// `故:` / `已故：` become `故 ` / `已故 `.
pub fn canonicalize_marker_colon(text: &str) -> String {
    MARKER_COLON.replace_all(text, "$1 ").into_owned()
}

/// `John Tan 2) Mary Lim` puts `2) Mary Lim` on its own line.
///
/// Only numbers after a space or a Han character break: `Tan (2) Lim` and
/// `A1.B` stay put, and `7.Eleven` is not a list label at all.
pub fn break_before_list_numbers(text: &str) -> String {
    LIST_NUMBER
        .replace_all(text, |caps: &Captures| {
            let whole = &caps[0];
            let start = caps.get(0).map_or(0, |m| m.start());
            let next = caps[3].chars().next().unwrap_or(' ');

            let after_gap = char_before(text, start).is_some_and(|c| (c != '\n' && c.is_whitespace()) || is_han(c));
            if after_gap && is_list_label(&caps[1], &caps[2], next) {
                format!("\n{whole}")
            } else {
                whole.to_string()
            }
        })
        .into_owned()
}

/// Every marker not at the start of input starts a new line, with exactly
/// one space between the marker and the name.
pub fn break_before_markers(text: &str) -> String {
    MARKER_BREAK
        .replace_all(text, |caps: &Captures| {
            let whole = &caps[0];
            let marker = &caps[1];
            let letter = &caps[2];
            let start = caps.get(0).map_or(0, |m| m.start());
            let marker_start = caps.get(1).map_or(0, |m| m.start());

            // Glued to a preceding Han character: part of a name.
            if start == marker_start && char_before(text, start).is_some_and(is_han) {
                return whole.to_string();
            }

            if start == 0 {
                format!("{marker} {letter}")
            } else {
                format!("\n{marker} {letter}")
            }
        })
        .into_owned()
}

/// `李成兴 李茹茵` becomes two lines; `已故 王小明` stays together.
///
/// This is a regional heuristic: nothing guarantees that two
/// space-separated Han runs are different people.
pub fn break_between_han_names(text: &str) -> String {
    HAN_GAP
        .replace_all(text, |caps: &Captures| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            let gap = caps.get(1).map_or(0..0, |m| m.range());

            if !char_at(text, gap.end).is_some_and(is_han) {
                return whole.to_string();
            }

            let han = &text[..gap.start];
            let run = &han[han_run_start(han, han.len())..];
            let last = &whole[..whole.len() - (gap.end - gap.start)];
            if is_marker(run) && !text[gap].contains('\n') {
                format!("{last} ")
            } else {
                format!("{last}\n")
            }
        })
        .into_owned()
}

/// Exactly one space between a marker and the following name on the same
/// line. A marker right after another marker (`故故John`) is still a marker;
/// one glued to any other Han character is part of a name.
pub fn space_after_markers(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut from = 0;
    let mut chain_end = None;

    for caps in MARKER_RUN.captures_iter(text) {
        let (Some(run), Some(marker)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let after_marker = chain_end == Some(run.start());
        if !after_marker && char_before(text, run.start()).is_some_and(is_han) {
            continue;
        }
        chain_end = Some(run.end());

        if char_at(text, run.end()).is_some_and(is_name_letter) {
            out.push_str(&text[from..run.start()]);
            out.push_str(marker.as_str());
            out.push(' ');
            from = run.end();
        }
    }

    out.push_str(&text[from..]);
    out
}
