use super::*;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    let service = ConfigService::new(tmp.path().join("quote.json"));
    assert_eq!(service.get_config(), QuoteConfig::default());
    assert!(!service.path().exists());
}

#[test]
fn test_partial_file_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("quote.json");
    fs::write(
        &path,
        r#"{"uplift_buffer_percentage": 15.0, "day_rates": {"installer": 300.0, "supervisor": null, "vehicle": 100.0, "waste_load": null}}"#,
    )
    .unwrap();

    let config = ConfigService::new(&path).get_config();
    assert_eq!(config.uplift_buffer_percentage, 15.0);
    assert_eq!(config.duration_buffer_percentage, 20.0);
    assert_eq!(config.day_rates.installer, Some(300.0));
    assert_eq!(config.day_rates.supervisor, None);
    assert_eq!(config.day_rates.specialist, None);
    assert_eq!(config.crew, CrewPolicy::default());
}

#[test]
fn test_corrupt_or_invalid_file_falls_back() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("quote.json");

    fs::write(&path, "{ not json").unwrap();
    assert_eq!(ConfigService::new(&path).get_config(), QuoteConfig::default());

    fs::write(&path, r#"{"out_of_hours_multiplier": 0.2}"#).unwrap();
    assert_eq!(ConfigService::new(&path).get_config(), QuoteConfig::default());
}

#[test]
fn test_save_writes_and_reloads() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("quote.json");
    let service = ConfigService::new(&path);

    let mut config = service.get_config();
    config.duration_buffer_percentage = 25.0;
    config.vehicles.remove("luton");
    service.save_config(config.clone()).unwrap();

    assert_eq!(service.get_config(), config);
    assert!(!tmp.path().join("nested").join("quote.json.tmp").exists());
    assert_eq!(ConfigService::new(&path).get_config(), config);
}

#[test]
fn test_invalid_save_changes_nothing() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("quote.json");
    let service = ConfigService::new(&path);
    service.save_config(QuoteConfig::default()).unwrap();
    let on_disk = fs::read_to_string(&path).unwrap();

    let mut bad = QuoteConfig::default();
    bad.crew.standard_workday_hours = -8.0;
    assert!(matches!(
        service.save_config(bad),
        Err(QuoteError::Validation(_))
    ));

    let mut bad_pattern = QuoteConfig::default();
    bad_pattern.matcher.aliases.push(AliasConfig {
        name: "broken".to_string(),
        pattern: "(unclosed".to_string(),
        codes: vec!["PED-3D".to_string()],
    });
    assert!(matches!(
        service.save_config(bad_pattern),
        Err(QuoteError::Config(_))
    ));

    assert_eq!(service.get_config(), QuoteConfig::default());
    assert_eq!(fs::read_to_string(&path).unwrap(), on_disk);
}

#[test]
fn test_rule_table_from_saved_matcher() {
    let tmp = TempDir::new().unwrap();
    let service = ConfigService::new(tmp.path().join("quote.json"));
    let mut config = service.get_config();
    config.matcher.aliases.push(AliasConfig {
        name: "pedestal".to_string(),
        pattern: r"\bPEDESTAL\b".to_string(),
        codes: vec!["PED-3D".to_string()],
    });
    service.save_config(config).unwrap();

    let rules = service.rule_table().unwrap();
    assert!(rules.rules().iter().any(|rule| rule.name == "pedestal"));
}
