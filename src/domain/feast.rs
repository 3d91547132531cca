//! Feast-day extraction from a mass title.

use once_cell::sync::Lazy;
use regex::Regex;

/// Label patterns tried in order; the first one matching anywhere in the
/// title wins, and only one capture is ever returned.
static FEAST_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"Feast of (.+)",
        r"Solemnity of (.+)",
        r"Memorial of (.+)",
        r"Optional Memorial of (.+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid feast label regex"))
    .collect()
});

/// Extract the feast name from a mass title, if the title carries one.
pub fn extract(title: &str) -> Option<String> {
    for pattern in FEAST_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(title) {
            return Some(captures[1].to_string());
        }
    }
    None
}
