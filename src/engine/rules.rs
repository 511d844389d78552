//! Ordered rewrite rules.
//!
//! Each stage that rewrites a working string is a fixed list of named pure
//! functions applied left to right. Rules never see the structure of a
//! previous stage, only its text.

use tracing::trace;

/// A single named rewrite step.
#[derive(Clone, Copy)]
pub struct RewriteRule {
    pub name: &'static str,
    rewrite: fn(&str) -> String,
}

impl RewriteRule {
    pub const fn new(name: &'static str, rewrite: fn(&str) -> String) -> Self {
        Self { name, rewrite }
    }

    pub fn apply(&self, text: &str) -> String {
        (self.rewrite)(text)
    }
}

impl std::fmt::Debug for RewriteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriteRule").field("name", &self.name).finish()
    }
}

/// Run every rule in order over `text`.
pub fn apply_all(rules: &[RewriteRule], text: &str) -> String {
    rules.iter().fold(text.to_string(), |acc, rule| {
        let next = rule.apply(&acc);
        if next != acc {
            trace!(rule = rule.name, before = %acc, after = %next, "rewrite");
        }
        next
    })
}
