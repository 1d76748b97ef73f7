use sessiondesk::config::Config;
use sessiondesk::constants::PAGE_SIZE_DEFAULT;
use sessiondesk::icons::IconTheme;
use sessiondesk::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.page_size, PAGE_SIZE_DEFAULT);
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert_eq!(config.display.currency_symbol, "$");
    assert_eq!(config.backend.kind, "snapshot");
    assert!(!config.backend.persist);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    config.ui.page_size = 0;
    assert!(config.validate().is_err());

    config.ui.page_size = 501;
    assert!(config.validate().is_err());

    config.ui.page_size = 50;
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    config.backend.kind = "remote".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_date_format_validation() {
    let mut config = Config::default();

    config.display.date_format = "%d/%m/%Y %H:%M".to_string();
    assert!(config.validate().is_ok());

    config.display.date_format = "%Q".to_string();
    assert!(config.validate().is_err());

    config.display.date_format = "   ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("page_size = 25"));
    assert!(toml_str.contains("icon_theme = \"ascii\""));
    assert!(toml_str.contains("[backend]"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
page_size = 50
icon_theme = "unicode"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.page_size, 50);
    assert_eq!(config.ui.icon_theme, IconTheme::Unicode);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.display.date_format, datetime::DISPLAY_DATE_FORMAT);
    assert_eq!(config.backend.snapshot_path.to_str(), Some("sessions.json"));
}

#[test]
fn test_load_from_file_and_generate() {
    let dir = std::env::temp_dir().join(format!("sessiondesk-config-{}", uuid::Uuid::new_v4()));
    let path = dir.join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# sessiondesk configuration file"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.ui.page_size, PAGE_SIZE_DEFAULT);

    std::fs::write(&path, "[ui]\npage_size = 0\n").unwrap();
    assert!(Config::load_from_file(&path).is_err());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_default_config_path() {
    if let Ok(path) = Config::get_default_config_path() {
        assert!(path.ends_with("sessiondesk/config.toml"));
    }
}
