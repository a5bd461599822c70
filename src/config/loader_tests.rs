//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn per(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

/// Temp file removed on drop.
struct TempConfig(PathBuf);

impl TempConfig {
    fn new(name: &str, contents: &str) -> Self {
        let path = env::temp_dir().join(format!("aidlog_{}_{}.toml", name, std::process::id()));
        fs::write(&path, contents).expect("Failed to write test config");
        TempConfig(path)
    }
}

impl Drop for TempConfig {
    fn drop(&mut self) {
        fs::remove_file(&self.0).ok();
    }
}

/// RAII guard to ensure environment variable cleanup.
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

// ===== File loading =====

#[test]
fn default_config_path_contains_aidlog_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("aidlog") && path_str.ends_with("config.toml"),
        "Path should contain 'aidlog' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(result, Ok(None), "Missing config file is not an error");
}

#[test]
fn load_config_file_parses_valid_toml() {
    let file = TempConfig::new(
        "valid",
        r#"
endpoint = "https://script.example/exec"
per_page = 25
future_search_debounce_ms = 300
completed_search_debounce_ms = 400
log_file_path = "/tmp/aidlog-test.log"
"#,
    );

    let config = load_config_file(&file.0).unwrap().unwrap();

    assert_eq!(
        config.endpoint.as_deref(),
        Some("https://script.example/exec")
    );
    assert_eq!(config.per_page, Some(25));
    assert_eq!(config.future_search_debounce_ms, Some(300));
    assert_eq!(config.completed_search_debounce_ms, Some(400));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/aidlog-test.log"))
    );
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let file = TempConfig::new("invalid", "per_page = [not valid");
    let result = load_config_file(&file.0);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str(r#"theme = "dark""#);
    assert!(result.is_err(), "Unknown keys must be rejected");
}

#[test]
fn token_is_not_a_config_file_key() {
    let result: Result<ConfigFile, _> = toml::from_str(r#"token = "secret""#);
    assert!(result.is_err());
}

#[test]
fn partial_config_parses() {
    let config: ConfigFile = toml::from_str("per_page = 50").unwrap();
    assert_eq!(config.per_page, Some(50));
    assert_eq!(config.endpoint, None);
}

// ===== Merge =====

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), Ok(ResolvedConfig::default()));
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.per_page.get(), 10);
    assert_eq!(config.search_delays.future, Duration::from_millis(250));
    assert_eq!(config.search_delays.completed, Duration::from_millis(250));
    assert!(config.endpoint.is_none());
    assert!(config.token.is_none());
    assert!(config.log_file_path.to_string_lossy().ends_with("aidlog.log"));
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let resolved = merge_config(Some(ConfigFile {
        endpoint: Some("https://e".into()),
        per_page: Some(50),
        future_search_debounce_ms: Some(100),
        completed_search_debounce_ms: None,
        log_file_path: None,
    }))
    .unwrap();

    assert_eq!(resolved.endpoint.as_deref(), Some("https://e"));
    assert_eq!(resolved.per_page, per(50));
    assert_eq!(resolved.search_delays.future, Duration::from_millis(100));
    assert_eq!(resolved.search_delays.completed, DEFAULT_SEARCH_DEBOUNCE);
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
fn merge_config_rejects_zero_page_size() {
    let result = merge_config(Some(ConfigFile {
        per_page: Some(0),
        ..ConfigFile::default()
    }));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue {
            key: "per_page",
            ..
        })
    ));
}

// ===== Env =====

#[test]
#[serial(aidlog_env)]
fn apply_env_overrides_sets_endpoint_and_token() {
    let _e = EnvGuard::new(ENV_ENDPOINT);
    let _t = EnvGuard::new(ENV_TOKEN);
    env::set_var(ENV_ENDPOINT, "https://env");
    env::set_var(ENV_TOKEN, "tok");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.endpoint.as_deref(), Some("https://env"));
    assert_eq!(result.token.as_deref(), Some("tok"));
}

#[test]
#[serial(aidlog_env)]
fn apply_env_overrides_ignores_empty_values() {
    let _e = EnvGuard::new(ENV_ENDPOINT);
    let _t = EnvGuard::new(ENV_TOKEN);
    env::set_var(ENV_TOKEN, "  ");

    let base = ResolvedConfig {
        token: Some("from-file".into()),
        ..ResolvedConfig::default()
    };
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base);
}

#[test]
#[serial(aidlog_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);
    let explicit = TempConfig::new("explicit", "per_page = 25");
    let from_env = TempConfig::new("env", "per_page = 50");
    env::set_var(ENV_CONFIG, &from_env.0);

    let config = load_config_with_precedence(Some(explicit.0.clone()))
        .unwrap()
        .unwrap();

    assert_eq!(config.per_page, Some(25));
}

#[test]
#[serial(aidlog_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);
    let from_env = TempConfig::new("env_only", "per_page = 50");
    env::set_var(ENV_CONFIG, &from_env.0);

    let config = load_config_with_precedence(None).unwrap().unwrap();

    assert_eq!(config.per_page, Some(50));
}

// ===== CLI =====

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None, None), base);
}

#[test]
#[serial(aidlog_env)]
fn precedence_chain_full_defaults_to_cli() {
    let _e = EnvGuard::new(ENV_ENDPOINT);
    let _t = EnvGuard::new(ENV_TOKEN);

    // GIVEN a config file with an endpoint and page size
    let from_file = merge_config(Some(ConfigFile {
        endpoint: Some("https://file".into()),
        per_page: Some(25),
        ..ConfigFile::default()
    }))
    .unwrap();

    // AND an env endpoint
    env::set_var(ENV_ENDPOINT, "https://env");
    let from_env = apply_env_overrides(from_file);
    assert_eq!(from_env.endpoint.as_deref(), Some("https://env"));
    assert_eq!(from_env.per_page, per(25));

    // WHEN CLI flags are applied
    let resolved = apply_cli_overrides(
        from_env,
        Some("https://cli".into()),
        Some("cli-token".into()),
        Some(per(100)),
    );

    // THEN CLI wins for every flag it sets
    assert_eq!(resolved.endpoint.as_deref(), Some("https://cli"));
    assert_eq!(resolved.token.as_deref(), Some("cli-token"));
    assert_eq!(resolved.per_page, per(100));
}
