//! Segmentation of preprocessed text into candidate chunks.

use super::patterns::{char_before, find_bounded, is_ascii_word, normalise_spaces, ID_TOKEN, NAME_ORDINAL};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[/|,，、;；\n]+").expect("valid separator regex");
}

/// Split text into ordered chunks, one candidate name or ID each.
///
/// Splits on separator runs and before `Name#n` ordinals, then isolates
/// every embedded identifier. With `trim_whitespace` each piece is
/// whitespace-normalized; pieces that are blank are always dropped.
pub fn segment(text: &str, trim_whitespace: bool) -> Vec<String> {
    SEPARATORS
        .split(text)
        .flat_map(split_before_ordinals)
        .flat_map(|part| explode_identifiers(part, trim_whitespace))
        .collect()
}

/// Cut `part` in front of each `Name #n` marker (zero-width).
pub fn split_before_ordinals(part: &str) -> Vec<&str> {
    let cuts: Vec<usize> = NAME_ORDINAL
        .find_iter(part)
        .map(|m| m.start())
        .filter(|&start| start > 0 && !char_before(part, start).is_some_and(is_ascii_word))
        .collect();

    let mut pieces = Vec::with_capacity(cuts.len() + 1);
    let mut from = 0;
    for cut in cuts {
        pieces.push(&part[from..cut]);
        from = cut;
    }
    pieces.push(&part[from..]);
    pieces
}

/// Separate identifiers from the name text around them, keeping order.
pub fn explode_identifiers(part: &str, trim_whitespace: bool) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut from = 0;

    for id in find_bounded(&ID_TOKEN, part) {
        pieces.push(&part[from..id.start]);
        pieces.push(&part[id.clone()]);
        from = id.end;
    }
    pieces.push(&part[from..]);

    pieces
        .into_iter()
        .filter(|piece| !piece.trim().is_empty())
        .map(|piece| {
            if trim_whitespace {
                normalise_spaces(piece)
            } else {
                piece.to_string()
            }
        })
        .collect()
}
