// Config loading and validation tests

use nocwatch::config::AppConfig;
use std::time::Duration;

const VALID_CONFIG: &str = r#"
[server]
port = 3000
host = "0.0.0.0"

[client]
base_url = "http://noc.local:3000"
poll_interval_ms = 5000
clock_interval_ms = 1000
request_timeout_secs = 10

[[sites]]
id = 1
name = "ESCOLA A"
manager = "GESTOR A"
phone = "92990000001"
baseline = 40

[[sites]]
id = 2
name = "ESCOLA B"
manager = "GESTOR B"
phone = "92990000002"
baseline = 60
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert!(config.server.static_dir.is_none());
    assert_eq!(config.client.base_url, "http://noc.local:3000");
    assert_eq!(config.client.poll_interval(), Duration::from_secs(5));
    assert_eq!(config.client.clock_interval(), Duration::from_secs(1));
    let roster = config.roster();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.sites()[1].name, "ESCOLA B");
    assert_eq!(roster.get(1).map(|s| s.baseline), Some(40));
}

#[test]
fn test_config_defaults_client_and_reference_roster() {
    let config = AppConfig::load_from_str("[server]\nport = 3000\nhost = \"0.0.0.0\"\n")
        .expect("minimal config");
    assert_eq!(config.client.base_url, "http://localhost:3000");
    assert_eq!(config.client.poll_interval_ms, 5000);
    assert_eq!(config.client.clock_interval_ms, 1000);
    assert_eq!(config.client.log_file, "nocwatch-view.log");
    let roster = config.roster();
    assert_eq!(roster.len(), 7);
    assert_eq!(roster.sites()[0].name, "ESCOLA CDE01");
    assert_eq!(roster.sites()[5].baseline, 95);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 3000", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_host() {
    let bad = VALID_CONFIG.replace("host = \"0.0.0.0\"", "host = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.host"));
}

#[test]
fn test_config_validation_rejects_empty_static_dir() {
    let bad = VALID_CONFIG.replace("host = \"0.0.0.0\"", "host = \"0.0.0.0\"\nstatic_dir = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("static_dir"));
}

#[test]
fn test_config_validation_rejects_poll_interval_zero() {
    let bad = VALID_CONFIG.replace("poll_interval_ms = 5000", "poll_interval_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("poll_interval_ms"));
}

#[test]
fn test_config_validation_rejects_clock_interval_zero() {
    let bad = VALID_CONFIG.replace("clock_interval_ms = 1000", "clock_interval_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("clock_interval_ms"));
}

#[test]
fn test_config_validation_rejects_request_timeout_zero() {
    let bad = VALID_CONFIG.replace("request_timeout_secs = 10", "request_timeout_secs = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("request_timeout_secs"));
}

#[test]
fn test_config_validation_rejects_empty_log_file() {
    let bad = VALID_CONFIG.replace("request_timeout_secs = 10", "request_timeout_secs = 10\nlog_file = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("client.log_file"));
}

#[test]
fn test_config_validation_rejects_empty_base_url() {
    let bad = VALID_CONFIG.replace("base_url = \"http://noc.local:3000\"", "base_url = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("base_url"));
}

#[test]
fn test_config_validation_rejects_duplicate_site_ids() {
    let bad = VALID_CONFIG.replace("id = 2", "id = 1");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("duplicate id 1"));
}

#[test]
fn test_config_validation_rejects_empty_roster() {
    let config = "sites = []\n\n[server]\nport = 3000\nhost = \"0.0.0.0\"\n";
    let err = AppConfig::load_from_str(config).unwrap_err();
    assert!(err.to_string().contains("sites"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    // SAFETY: the only test in this binary touching CONFIG_FILE.
    unsafe { std::env::set_var("CONFIG_FILE", &path) };
    let config = AppConfig::load().expect("load from CONFIG_FILE");
    unsafe { std::env::remove_var("CONFIG_FILE") };
    assert_eq!(config.roster().len(), 2);
}
