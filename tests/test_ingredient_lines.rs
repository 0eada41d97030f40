use muffin_import::{parse_ingredient_line, Ingredient, ParseError};

fn ingredient(quantity: Option<f64>, unit: Option<&str>, name: &str) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        quantity,
        unit: unit.map(str::to_string),
    }
}

#[test]
fn test_ingredient_lines() {
    let cases = [
        // quantity + unit + name
        ("200 g de farine", ingredient(Some(200.0), Some("g"), "farine")),
        // spoon with modifier
        (
            "2 belles cuillères à soupe de miel",
            ingredient(Some(2.0), Some("belles cuillères à soupe"), "miel"),
        ),
        // fraction
        ("1/2 sachet de levure", ingredient(Some(0.5), Some("sachet"), "levure")),
        // apostrophe connector
        ("2 gousses d'ail", ingredient(Some(2.0), Some("gousses"), "ail")),
        // literal "(s)" plural marker
        (
            "1 unité(s) de citron",
            ingredient(Some(1.0), Some("unité(s)"), "citron"),
        ),
        // no quantity, no unit
        ("Sucre glace", ingredient(None, None, "Sucre glace")),
        // parenthesis
        (
            "500 g de tomates (bio et mûres)",
            ingredient(Some(500.0), Some("g"), "tomates"),
        ),
        // ellipsis
        ("1 pincée de sel...", ingredient(Some(1.0), Some("pincée"), "sel")),
        // "et"
        ("3 pommes et 2 poires", ingredient(Some(3.0), None, "pommes")),
        // "+"
        (
            "100 g de sucre + un peu pour le moule",
            ingredient(Some(100.0), Some("g"), "sucre"),
        ),
        // "ou"
        (
            "2 oeufs ou un substitut d'œuf",
            ingredient(Some(2.0), None, "oeufs"),
        ),
        // "pour"
        (
            "500 g de farine pour la pâte",
            ingredient(Some(500.0), Some("g"), "farine"),
        ),
    ];

    for (raw, expected) in cases {
        assert_eq!(parse_ingredient_line(raw).unwrap(), expected, "line {raw:?}");
    }
}

#[test]
fn test_comma_and_dot_decimals_agree() {
    let comma = parse_ingredient_line("7,25 cl de lait").unwrap();
    let dot = parse_ingredient_line("7.25 cl de lait").unwrap();
    assert_eq!(comma, dot);
    assert_eq!(comma.quantity, Some(7.25));
}

#[test]
fn test_unit_casing_is_kept() {
    let parsed = parse_ingredient_line("3 Tranches de Jambon").unwrap();
    assert_eq!(parsed, ingredient(Some(3.0), Some("Tranches"), "Jambon"));
}

#[test]
fn test_word_boundaries_in_names() {
    let parsed = parse_ingredient_line("1 blanc de poulet").unwrap();
    assert_eq!(parsed, ingredient(Some(1.0), None, "blanc de poulet"));
}

#[test]
fn test_unknown_unit_word_stays_in_name() {
    let parsed = parse_ingredient_line("1 litre de lait").unwrap();
    assert_eq!(parsed, ingredient(Some(1.0), None, "litre de lait"));
}

#[test]
fn test_degenerate_lines() {
    assert_eq!(
        parse_ingredient_line(""),
        Err(ParseError::IngredientParse(String::new()))
    );

    let symbolic = parse_ingredient_line("+ ...").unwrap();
    assert_eq!(symbolic, ingredient(None, None, ""));
    assert!(symbolic.is_degraded());
}
