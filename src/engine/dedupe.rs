//! Order-preserving, ASCII case-insensitive deduplication of tokens.

use rustc_hash::FxHashSet;

/// Comparison key: only ASCII `A-Z` are folded. Han and full-width Latin
/// pass through, so visually distinct tokens never collapse.
pub fn dedupe_key(token: &str) -> String {
    token.to_ascii_lowercase()
}

/// Keep the first token of each key, in order. Disabled: unchanged.
pub fn dedupe(tokens: Vec<String>, enabled: bool) -> Vec<String> {
    if !enabled {
        return tokens;
    }

    let mut seen = FxHashSet::default();
    tokens
        .into_iter()
        .filter(|token| seen.insert(dedupe_key(token)))
        .collect()
}
