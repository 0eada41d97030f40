//! Cleanup of the free-text tail of an ingredient line.

use lazy_static::lazy_static;
use regex::Regex;

/// Words that start an alternative, an addition or a usage note. Everything
/// from the leftmost marker on is dropped.
pub const TRUNCATION_WORDS: &[&str] = &["et/ou", "ou", "et", "plus", "avec", "pour", "dans"];

/// Symbols with the same effect, matched without word boundaries.
pub const TRUNCATION_SYMBOLS: &[&str] = &["+"];

lazy_static! {
    static ref TRUNCATION_MARKER: Regex = {
        let words = TRUNCATION_WORDS
            .iter()
            .map(|word| format!(r"\b{}\b", regex::escape(word)));
        let symbols = TRUNCATION_SYMBOLS.iter().map(|symbol| regex::escape(symbol));
        let alternatives = words.chain(symbols).collect::<Vec<_>>().join("|");
        Regex::new(&format!("(?i:{alternatives})")).expect("Truncation markers should be valid")
    };
}

/// Clean the raw name tail of an ingredient line.
///
/// Steps run in order on the previous step's output: cut at the first `(`,
/// cut at the first `...`, cut at the leftmost truncation marker, drop a
/// leading `d'`/`d’`, trim. The result is empty when the tail held nothing
/// but markers or punctuation.
pub fn cleanse_name(tail: &str) -> String {
    let mut name = tail;

    if let Some(pos) = name.find('(') {
        name = &name[..pos];
    }
    if let Some(pos) = name.find("...") {
        name = &name[..pos];
    }
    if let Some(marker) = TRUNCATION_MARKER.find(name) {
        name = &name[..marker.start()];
    }

    strip_elision(name.trim_start()).trim().to_string()
}

fn strip_elision(name: &str) -> &str {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some('d' | 'D'), Some('\'' | '’')) => chars.as_str(),
        _ => name,
    }
}
