use super::*;
use crate::services::config::{AliasConfig, MatcherConfig};

fn keys_for(table: &RuleTable, raw: &str) -> Vec<(String, Vec<String>)> {
    let (code, description) = table.prepare_inputs(raw);
    table
        .rules()
        .iter()
        .filter_map(|rule| {
            rule.candidates(&code, &description)
                .map(|keys| (rule.name.clone(), keys.into_iter().map(|k| k.key).collect()))
        })
        .collect()
}

#[test]
fn test_default_table_order() {
    let table = RuleTable::default();
    let names: Vec<&str> = table.rules().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec![STRUCTURED_RULE, "flx-seat-text"]);
}

#[test]
fn test_structured_with_size() {
    let table = RuleTable::default();
    let hits = keys_for(&table, "FLX-4P-2400");
    assert_eq!(hits[0].0, STRUCTURED_RULE);
    assert_eq!(
        hits[0].1,
        vec!["FLX-COWORK-4P-L2400", "FLX 4P", "4P FLX", "FLX-4P"]
    );
}

#[test]
fn test_structured_with_suffix() {
    let table = RuleTable::default();
    let hits = keys_for(&table, "flx-4p-2816-a");
    assert_eq!(hits[0].0, STRUCTURED_RULE);
    assert_eq!(hits[0].1[0], "FLX-COWORK-4P-L2816");
}

#[test]
fn test_structured_without_separators() {
    let table = RuleTable::default();
    for raw in ["FLX4P2400", "FLX4P-2400", "flx 4p_2400"] {
        let hits = keys_for(&table, raw);
        assert_eq!(hits[0].0, STRUCTURED_RULE, "rule for '{raw}'");
        assert_eq!(hits[0].1[0], "FLX-COWORK-4P-L2400", "first key for '{raw}'");
    }
}

#[test]
fn test_structured_non_size_digits() {
    let table = RuleTable::default();
    let hits = keys_for(&table, "FLX-4P-12345");
    // Five digits is not a size token, so only generic keys are produced.
    assert_eq!(hits[0].1, vec!["FLX 4P", "4P FLX", "FLX-4P"]);
}

#[test]
fn test_structured_single_seat_skips_specific_key() {
    let table = RuleTable::default();
    let hits = keys_for(&table, "FLX-1P-1600");
    assert_eq!(hits[0].1, vec!["FLX 1P", "1P FLX", "FLX-1P"]);
}

#[test]
fn test_structured_rejects_zero_seats() {
    let table = RuleTable::default();
    let hits = keys_for(&table, "FLX-0P-2400");
    assert!(hits.iter().all(|(name, _)| name != STRUCTURED_RULE));
}

#[test]
fn test_free_text_forward() {
    let table = RuleTable::default();
    let hits = keys_for(&table, "Supply and install Flex 6 person bench 3200mm");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, "flx-seat-text");
    assert_eq!(
        hits[0].1,
        vec!["FLX-COWORK-6P-L3200", "FLX 6P", "6P FLX", "FLX-6P"]
    );
}

#[test]
fn test_free_text_reverse() {
    let table = RuleTable::default();
    let hits = keys_for(&table, "2 seater FLX workstation");
    assert_eq!(hits[0].0, "flx-seat-text");
    assert_eq!(hits[0].1, vec!["FLX 2P", "2P FLX", "FLX-2P"]);
}

#[test]
fn test_free_text_no_match() {
    let table = RuleTable::default();
    assert!(keys_for(&table, "Pedestal 3 drawer").is_empty());
}

#[test]
fn test_alias_rules_follow_families() {
    let config = MatcherConfig {
        aliases: vec![AliasConfig {
            name: "pedestal".to_string(),
            pattern: r"\bPED(?:ESTAL)?\b".to_string(),
            codes: vec!["PED-3D".to_string(), "PED 3D".to_string()],
        }],
        ..MatcherConfig::default()
    };
    let table = RuleTable::from_config(&config).unwrap();
    assert_eq!(table.rules().last().unwrap().name, "pedestal");

    let hits = keys_for(&table, "mobile pedestal 3 drawer");
    assert_eq!(hits, vec![("pedestal".to_string(), vec!["PED-3D".to_string(), "PED 3D".to_string()])]);
}

#[test]
fn test_invalid_alias_pattern_is_config_error() {
    let config = MatcherConfig {
        aliases: vec![AliasConfig {
            name: "broken".to_string(),
            pattern: "(unclosed".to_string(),
            codes: vec!["X".to_string()],
        }],
        ..MatcherConfig::default()
    };
    let err = RuleTable::from_config(&config).unwrap_err();
    assert!(matches!(err, QuoteError::Config(msg) if msg.contains("broken")));
}

#[test]
fn test_family_seat_keys_order() {
    let keys = family_seat_keys("FLX", 4, Some("2400"));
    assert_eq!(keys[0].strategy, MatchStrategy::SpecificSize);
    assert!(keys[1..]
        .iter()
        .all(|k| k.strategy == MatchStrategy::GenericFamily));
}
