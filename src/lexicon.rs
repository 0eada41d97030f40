//! French culinary unit vocabulary.
//!
//! [`UNIT_FORMS`] is a priority list, not a set: forms overlap
//! ("cuillères à soupe" / "cuillères", "briques" / "briquettes") and the
//! first form that matches wins. Longer phrases must therefore precede the
//! shorter phrases they contain.

use lazy_static::lazy_static;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    /// verre, tasse, bol, pot, bocal, brique, boîte
    Container,
    /// barquette, paquet, sachet, tablette, portion
    Packaging,
    /// cl, ml, dl, l, kg, g
    Metric,
    /// cuillère(s) with optional modifier and "à soupe/café/thé"
    Spoon,
    /// tranche, lamelle, rondelle, dé, morceau, carré
    Cut,
    /// gousse, feuille, branche, brin, bouquet, pépite, trait, pointe
    PlantPart,
    /// pincée, poignée, goutte
    ManualMeasure,
    /// unité(s), unité, demi
    Generic,
}

/// One recognized surface form, as a case-insensitive pattern.
#[derive(Debug, Clone, Copy)]
pub struct UnitForm {
    pub category: UnitCategory,
    pub pattern: &'static str,
}

const fn form(category: UnitCategory, pattern: &'static str) -> UnitForm {
    UnitForm { category, pattern }
}

use UnitCategory::*;

/// Unit forms in match priority order.
pub const UNIT_FORMS: &[UnitForm] = &[
    form(Container, "verres?"),
    form(Container, "tasses?"),
    form(Container, "bols?"),
    form(Container, "pots?"),
    form(Container, "bocal"),
    form(Container, "bocaux"),
    form(Container, "briques?"),
    form(Container, "briquettes?"),
    form(Container, "boîtes?"),
    form(Packaging, "barquettes?"),
    form(Packaging, "paquets?"),
    form(Packaging, "sachets?"),
    form(Packaging, "tablettes?"),
    form(Packaging, "portions?"),
    // single letters rely on the trailing word boundary: "l" must not match "litre"
    form(Metric, "cl"),
    form(Metric, "ml"),
    form(Metric, "dl"),
    form(Metric, "l"),
    form(Metric, "kg"),
    form(Metric, "g"),
    form(Spoon, "(?:[a-zâéè]+ )?cuillères?(?: à (?:soupe|café|thé))?"),
    form(Spoon, "à thé"),
    form(Cut, "tranches?(?: épaisses)?"),
    form(Cut, "lamelles?"),
    form(Cut, "rondelles?"),
    form(Cut, "dés?"),
    form(Cut, "morceaux?"),
    form(Cut, "carrés?"),
    form(PlantPart, "gousses?"),
    form(PlantPart, "feuilles?"),
    form(PlantPart, "branches?"),
    form(PlantPart, "brins?"),
    form(PlantPart, "bouquets?"),
    form(PlantPart, "pépites?"),
    form(PlantPart, "traits?"),
    form(PlantPart, "pointes?"),
    form(ManualMeasure, "(?:grosses? |petites? )?pincées?"),
    form(ManualMeasure, "(?:grosses? |petites? )?poignées?"),
    form(ManualMeasure, "gouttes?"),
    form(Generic, r"unité\(s\)"),
    form(Generic, "unités?"),
    form(Generic, "demis?"),
];

struct CompiledForm {
    category: UnitCategory,
    regex: Regex,
}

/// Anchor `pattern` at the start, case-insensitively.
///
/// The trailing `\b` is only added when the form ends in a word: after a
/// literal `)` it would reject the space that follows.
fn anchored(pattern: &str) -> String {
    if pattern.ends_with(r"\)") {
        format!(r"^(?i:{pattern})")
    } else {
        format!(r"^(?i:{pattern})\b")
    }
}

lazy_static! {
    static ref COMPILED_FORMS: Vec<CompiledForm> = UNIT_FORMS
        .iter()
        .map(|form| CompiledForm {
            category: form.category,
            regex: Regex::new(&anchored(form.pattern)).expect("Unit patterns should be valid"),
        })
        .collect();
}

/// A unit recognized at the start of some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitMatch<'a> {
    /// Matched surface form, in source casing
    pub text: &'a str,
    /// Byte offset just past the unit
    pub end: usize,
    pub category: UnitCategory,
}

/// Match the highest-priority unit form at the very start of `text`.
///
/// The caller is responsible for the word boundary before `text`. No match is
/// an ordinary outcome.
pub fn match_unit(text: &str) -> Option<UnitMatch<'_>> {
    COMPILED_FORMS.iter().find_map(|form| {
        form.regex.find(text).map(|m| UnitMatch {
            text: m.as_str(),
            end: m.end(),
            category: form.category,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_of(text: &str) -> Option<&str> {
        match_unit(text).map(|m| m.text)
    }

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(COMPILED_FORMS.len(), UNIT_FORMS.len());
    }

    #[test]
    fn test_longer_spoon_phrase_wins() {
        assert_eq!(unit_of("cuillères à soupe de miel"), Some("cuillères à soupe"));
        assert_eq!(unit_of("cuillère à café de sel"), Some("cuillère à café"));
        assert_eq!(unit_of("cuillères de sucre"), Some("cuillères"));
        assert_eq!(
            unit_of("belles cuillères à soupe de miel"),
            Some("belles cuillères à soupe")
        );
    }

    #[test]
    fn test_single_letter_metric_units_need_word_boundary() {
        assert_eq!(unit_of("g de farine"), Some("g"));
        assert_eq!(unit_of("l de lait"), Some("l"));
        assert_eq!(unit_of("kg"), Some("kg"));
        assert_eq!(unit_of("litre de lait"), None);
        assert_eq!(unit_of("gingembre"), None);
    }

    #[test]
    fn test_overlapping_container_forms() {
        let m = match_unit("briquettes de crème").unwrap();
        assert_eq!(m.text, "briquettes");
        assert_eq!(m.category, Container);
        assert_eq!(unit_of("brique de lait"), Some("brique"));
        assert_eq!(unit_of("bocaux de miel"), Some("bocaux"));
    }

    #[test]
    fn test_match_is_case_insensitive_and_keeps_source_casing() {
        let m = match_unit("Gousses d'ail").unwrap();
        assert_eq!(m.text, "Gousses");
        assert_eq!(m.end, "Gousses".len());
        assert_eq!(m.category, PlantPart);
        assert_eq!(unit_of("CUILLÈRES À SOUPE"), Some("CUILLÈRES À SOUPE"));
    }

    #[test]
    fn test_modified_manual_measures() {
        assert_eq!(unit_of("grosses pincées de sel"), Some("grosses pincées"));
        assert_eq!(unit_of("petite poignée de noix"), Some("petite poignée"));
        assert_eq!(unit_of("gouttes de vanille"), Some("gouttes"));
    }

    #[test]
    fn test_cut_and_generic_forms() {
        assert_eq!(unit_of("tranches épaisses de pain"), Some("tranches épaisses"));
        assert_eq!(unit_of("tranche de jambon"), Some("tranche"));
        assert_eq!(unit_of("carré frais"), Some("carré"));
        assert_eq!(unit_of("unités"), Some("unités"));
        assert_eq!(unit_of("unité(s) de citron"), Some("unité(s)"));
        assert_eq!(unit_of("unité de beurre"), Some("unité"));
        assert_eq!(unit_of("demi de levure"), Some("demi"));
    }

    #[test]
    fn test_no_unit() {
        assert_eq!(match_unit("pommes et 2 poires"), None);
        assert_eq!(match_unit("Sucre glace"), None);
        assert_eq!(match_unit(""), None);
    }
}
