//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

/// Temp file removed on drop.
struct TempConfig(PathBuf);

impl TempConfig {
    fn new(name: &str, contents: &str) -> Self {
        let path = env::temp_dir().join(name);
        fs::write(&path, contents).expect("Failed to write test config");
        TempConfig(path)
    }
}

impl Drop for TempConfig {
    fn drop(&mut self) {
        fs::remove_file(&self.0).ok();
    }
}

// ===== Paths =====

#[test]
fn default_config_path_contains_versebook_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("versebook") && path_str.ends_with("config.toml"),
            "Path should contain 'versebook' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn default_log_path_ends_with_versebook_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("versebook.log"),
        "Default log path should end with 'versebook.log', got: {:?}",
        path
    );
}

// ===== load_config_file =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/versebook.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn load_config_file_parses_valid_toml() {
    let file = TempConfig::new(
        "versebook_test_valid.toml",
        r#"
show_romanization = false
show_commentary = true
log_file_path = "/tmp/versebook-test.log"
"#,
    );

    let config = load_config_file(&file.0)
        .expect("valid TOML should parse")
        .expect("existing file should yield Some");

    assert_eq!(config.show_romanization, Some(false));
    assert_eq!(config.show_commentary, Some(true));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/versebook-test.log"))
    );
}

#[test]
fn load_config_file_handles_partial_config() {
    let file = TempConfig::new("versebook_test_partial.toml", "show_commentary = false\n");

    let config = load_config_file(&file.0).unwrap().unwrap();
    assert_eq!(config.show_commentary, Some(false));
    assert_eq!(config.show_romanization, None);
    assert_eq!(config.log_file_path, None);
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let file = TempConfig::new("versebook_test_invalid.toml", "this is not valid TOML ][}{");

    match load_config_file(&file.0) {
        Err(ConfigError::ParseError { path, .. }) => assert_eq!(path, file.0),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn config_file_rejects_unknown_fields() {
    let file = TempConfig::new("versebook_test_unknown.toml", "font_size = 30\n");

    assert!(matches!(
        load_config_file(&file.0),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn load_config_file_on_directory_is_read_error() {
    let dir = env::temp_dir();
    assert!(matches!(
        load_config_file(&dir),
        Err(ConfigError::ReadError { .. })
    ));
}

// ===== merge_config =====

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config = ConfigFile {
        show_romanization: Some(false),
        show_commentary: Some(false),
        log_file_path: Some(PathBuf::from("/custom/app.log")),
    };

    let resolved = merge_config(Some(config));
    assert!(!resolved.show_romanization);
    assert!(!resolved.show_commentary);
    assert_eq!(resolved.log_file_path, PathBuf::from("/custom/app.log"));
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let resolved = merge_config(Some(ConfigFile::default()));
    assert_eq!(resolved, ResolvedConfig::default());
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert!(config.show_romanization);
    assert!(config.show_commentary);
    assert!(!config.log_file_path.as_os_str().is_empty());
}

// ===== apply_env_overrides =====

#[test]
#[serial(versebook_log)]
fn apply_env_overrides_respects_log_var() {
    let _guard = EnvGuard::new(LOG_ENV_VAR);
    env::set_var(LOG_ENV_VAR, "/tmp/env.log");

    let result = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result.log_file_path, PathBuf::from("/tmp/env.log"));
}

#[test]
#[serial(versebook_log)]
fn apply_env_overrides_ignores_empty_log_var() {
    let _guard = EnvGuard::new(LOG_ENV_VAR);
    env::set_var(LOG_ENV_VAR, "");

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(versebook_log)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(LOG_ENV_VAR);

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

// ===== apply_cli_overrides =====

#[test]
fn cli_hide_flags_turn_fields_off() {
    let result = apply_cli_overrides(ResolvedConfig::default(), true, true);
    assert!(!result.show_romanization);
    assert!(!result.show_commentary);
}

#[test]
fn cli_unset_flags_keep_config_values() {
    let base = merge_config(Some(ConfigFile {
        show_romanization: Some(false),
        ..ConfigFile::default()
    }));
    let result = apply_cli_overrides(base, false, false);
    assert!(!result.show_romanization);
    assert!(result.show_commentary);
}

// ===== load_config_with_precedence =====

#[test]
#[serial(versebook_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let explicit = TempConfig::new("versebook_explicit.toml", "show_commentary = false\n");
    let via_env = TempConfig::new("versebook_env.toml", "show_commentary = true\n");
    env::set_var(CONFIG_ENV_VAR, via_env.0.to_str().unwrap());

    let config = load_config_with_precedence(Some(explicit.0.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(config.show_commentary, Some(false));
}

#[test]
#[serial(versebook_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let via_env = TempConfig::new("versebook_env_only.toml", "show_romanization = false\n");
    env::set_var(CONFIG_ENV_VAR, via_env.0.to_str().unwrap());

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.show_romanization, Some(false));
}

#[test]
#[serial(versebook_config)]
fn load_config_with_precedence_env_path_missing_is_none() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    env::set_var(CONFIG_ENV_VAR, "/nonexistent/versebook/config.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}
