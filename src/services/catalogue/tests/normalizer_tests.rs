use super::*;

#[test]
fn test_normalize_code_strips_separators() {
    assert_eq!(normalize_code("FLX-4P-2400"), "FLX4P2400");
    assert_eq!(normalize_code("flx_4p 2400"), "FLX4P2400");
    assert_eq!(normalize_code("FLX (4P) 2400"), "FLX4P2400");
    assert_eq!(normalize_code("  flx 4p\t2400 "), "FLX4P2400");
}

#[test]
fn test_normalize_code_transliterates() {
    assert_eq!(normalize_code("café-1"), "CAFE1");
}

#[test]
fn test_normalize_code_keeps_other_punctuation() {
    // Only whitespace, parentheses, hyphens and underscores are noise.
    assert_eq!(normalize_code("PED.3D/W"), "PED.3D/W");
}

#[test]
fn test_normalize_code_empty() {
    assert_eq!(normalize_code(""), "");
    assert_eq!(normalize_code(" - _ "), "");
}

#[test]
fn test_normalize_description() {
    assert_eq!(
        normalize_description("Flex  4-person desk / 2400mm"),
        "FLEX 4 PERSON DESK 2400MM"
    );
    assert_eq!(normalize_description("  (new)  bench "), "NEW BENCH");
}

#[test]
fn test_strip_known_prefixes() {
    let prefixes = vec!["Supply and install".to_string(), "NEW".to_string()];
    assert_eq!(
        strip_known_prefixes("SUPPLY AND INSTALL FLEX 4 PERSON", &prefixes),
        "FLEX 4 PERSON"
    );
    assert_eq!(strip_known_prefixes("NEW FLX 6P", &prefixes), "FLX 6P");
    // Prefix must end on a word boundary
    assert_eq!(strip_known_prefixes("NEWTON DESK", &prefixes), "NEWTON DESK");
    assert_eq!(strip_known_prefixes("FLX 6P", &prefixes), "FLX 6P");
}
