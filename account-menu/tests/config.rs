use std::io::Write;

use account_menu::{ConfigError, DropdownConfig, MatchPolicy};

#[test]
fn test_defaults_match_account_markup() {
    let config = DropdownConfig::default();
    assert_eq!(config.trigger_selector, ".account-link");
    assert_eq!(config.panel_selector, ".account-dropdown");
    assert_eq!(config.marker_class, "active");
    assert_eq!(config.match_policy, MatchPolicy::Unique);
    assert!(!config.initially_open);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = DropdownConfig::from_toml_str(
        r##"
trigger_selector = "#user-menu"
match_policy = "first"
"##,
    )
    .unwrap();

    assert_eq!(
        config,
        DropdownConfig::default()
            .with_trigger_selector("#user-menu")
            .with_match_policy(MatchPolicy::First)
    );
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(DropdownConfig::from_toml_str("").unwrap(), DropdownConfig::default());
}

#[test]
fn test_unknown_policy_is_rejected() {
    let err = DropdownConfig::from_toml_str(r#"match_policy = "all""#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "marker_class = \"open\"").unwrap();
    writeln!(file, "initially_open = true").unwrap();

    let config = DropdownConfig::load(file.path()).unwrap();
    assert_eq!(config.marker_class, "open");
    assert!(config.initially_open);
    assert_eq!(config.panel_selector, ".account-dropdown");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dropdown.toml");

    let err = DropdownConfig::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
