use flightpath_core::PlaceCatalogue;

#[test]
fn test_place_name_lookup() {
    let catalogue = PlaceCatalogue::indian_domestic();

    assert_eq!(catalogue.place_name("DEL"), Some("New Delhi"));
    assert_eq!(catalogue.place_name("BOM"), Some("Mumbai"));
    assert_eq!(catalogue.place_name("XXX"), None);
}

#[test]
fn test_resolve_code_matches_loosely() {
    let catalogue = PlaceCatalogue::indian_domestic();

    assert_eq!(catalogue.resolve_code("New Delhi"), "DEL");
    assert_eq!(catalogue.resolve_code("new delhi"), "DEL");
    assert_eq!(catalogue.resolve_code("  NEW   DELHI  "), "DEL");
    assert_eq!(catalogue.resolve_code("Thiruvananthapuram"), "TRV");
}

#[test]
fn test_resolve_code_folds_accents() {
    let catalogue = PlaceCatalogue::indian_domestic();

    assert_eq!(catalogue.resolve_code("Gōa"), "GOI");
    assert_eq!(catalogue.resolve_code("Mumbaï"), "BOM");
}

#[test]
fn test_resolve_code_passes_unknown_input_through() {
    let catalogue = PlaceCatalogue::indian_domestic();

    // Codes are not place names, so they pass through trimmed.
    assert_eq!(catalogue.resolve_code("DEL"), "DEL");
    assert_eq!(catalogue.resolve_code(" BOM "), "BOM");
    assert_eq!(catalogue.resolve_code("Atlantis"), "Atlantis");
}

#[test]
fn test_duplicate_place_names_resolve_to_first_code() {
    let catalogue = PlaceCatalogue::indian_domestic();

    // Both TEE and TEZ are listed as Tezpur; the first listing wins.
    assert_eq!(catalogue.resolve_code("Tezpur"), "TEE");
    assert_eq!(catalogue.place_name("TEZ"), Some("Tezpur"));
}

#[test]
fn test_legend_is_sorted_and_skips_unknown_codes() {
    let catalogue = PlaceCatalogue::indian_domestic();

    let legend = catalogue.legend(["BOM", "XXX", "DEL", "BOM"]);

    assert_eq!(
        legend,
        vec![
            ("BOM".to_string(), "Mumbai".to_string()),
            ("DEL".to_string(), "New Delhi".to_string()),
        ]
    );
}

#[test]
fn test_indian_domestic_size() {
    let catalogue = PlaceCatalogue::indian_domestic();

    assert_eq!(catalogue.len(), 75);
    assert!(!catalogue.is_empty());
}

#[test]
fn test_from_pairs() {
    let catalogue = PlaceCatalogue::from_pairs([("AAA", "Alpha Town"), ("BBB", "Beta City")]);

    assert_eq!(catalogue.len(), 2);
    assert_eq!(catalogue.place_name("AAA"), Some("Alpha Town"));
    assert_eq!(catalogue.resolve_code("beta city"), "BBB");
}

#[test]
fn test_empty_catalogue() {
    let catalogue = PlaceCatalogue::default();

    assert!(catalogue.is_empty());
    assert_eq!(catalogue.place_name("DEL"), None);
    assert_eq!(catalogue.resolve_code("New Delhi"), "New Delhi");
}
