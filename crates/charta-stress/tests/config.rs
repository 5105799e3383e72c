use charta_audit::ScoringPolicy;
use charta_stress::config::{CURRENT_VERSION, ChartaConfig, load_config, migrate, save_config};
use serde_json::json;

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut config = ChartaConfig::standard();
    config.config_version = 0;
    config.policy.min_acupoint_overlap = 0.6;
    save_config(&path, &config).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.policy.min_acupoint_overlap, 0.6);
    assert_eq!(loaded.vocabulary, config.vocabulary);
    assert!(!dir.path().join("nested").join("config.json.tmp").exists());
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config(&path, &ChartaConfig::standard()).unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn unversioned_config_gains_default_scoring() {
    let vocabulary = serde_json::to_value(ChartaConfig::standard().vocabulary).unwrap();
    let migrated = migrate(json!({ "vocabulary": vocabulary }), 0).unwrap();

    assert_eq!(migrated["config_version"], json!(1));
    let config: ChartaConfig = serde_json::from_value(migrated).unwrap();
    assert_eq!(config.scoring, ScoringPolicy::default());
}

#[test]
fn migration_keeps_hand_written_scoring() {
    let mut scoring = serde_json::to_value(ScoringPolicy::default()).unwrap();
    scoring["pass_threshold"] = json!(95);
    let migrated = migrate(json!({ "vocabulary": { "labels": {} }, "scoring": scoring }), 0).unwrap();
    assert_eq!(migrated["scoring"]["pass_threshold"], json!(95));
}

#[test]
fn newer_config_is_rejected() {
    let err = migrate(json!({ "config_version": 9 }), 9).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_rejected() {
    assert!(migrate(json!([1, 2, 3]), 0).is_err());
}

#[test]
fn missing_config_points_at_init() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("config.json")).unwrap_err();
    assert!(err.to_string().contains("init-config"));
}
