//! Accent and case folding for keyword classification.
//!
//! Only classification inputs go through here; names and titles keep their
//! source spelling.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase `text` and strip its diacritics (NFD, then drop combining marks).
///
/// Lowercasing happens first: some capitals only gain their mark when
/// lowercased (`İ` becomes `i` + U+0307).
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_accents_and_case() {
        assert_eq!(normalize("EnlèvE Moi ToUt ça"), "enleve moi tout ca");
        assert_eq!(normalize("Gâteaux à la crème"), "gateaux a la creme");
        assert_eq!(normalize("PIÈCES"), "pieces");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_keeps_letters_without_marks() {
        // œ is a ligature, not a decomposable accent
        assert_eq!(normalize("Œufs"), "œufs");
        assert_eq!(normalize("4 personnes"), "4 personnes");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for text in ["EnlèvE Moi ToUt ça", "Crème brûlée", "Ñandú", "", "déjà vu"] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once);
        }
    }
}
