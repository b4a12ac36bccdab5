use abuse_dns_domain::config::{CliOverrides, Config};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.web_port, 8080);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.upstream.host, "api.findabuse.email");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_parses_partial_toml() {
    let toml_str = r#"
        [upstream]
        host = "abuse.example.net"
    "#;

    let config: Config = toml::from_str(toml_str).expect("partial config should parse");
    assert_eq!(config.upstream.host, "abuse.example.net");
    assert_eq!(config.server.web_port, 8080);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_parses_full_toml() {
    let toml_str = r#"
        [server]
        web_port = 9053
        bind_address = "127.0.0.1"

        [upstream]
        host = "api.findabuse.email"

        [logging]
        level = "debug"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.server.web_port, 9053);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_cli_overrides_take_precedence() {
    let overrides = CliOverrides {
        web_port: Some(3000),
        bind_address: Some("127.0.0.1".to_string()),
        upstream_host: Some("mirror.findabuse.email".to_string()),
        log_level: Some("trace".to_string()),
    };

    let config = Config::load(None, overrides).unwrap();
    assert_eq!(config.server.web_port, 3000);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.upstream.host, "mirror.findabuse.email");
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_validation_rejects_zero_port() {
    let mut config = Config::default();
    config.server.web_port = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_rejects_empty_or_url_host() {
    let mut config = Config::default();
    config.upstream.host = String::new();
    assert!(config.validate().is_err());

    config.upstream.host = "https://api.findabuse.email/api".to_string();
    assert!(config.validate().is_err());

    config.upstream.host = "api.findabuse.email".to_string();
    assert!(config.validate().is_ok());
}
