use fieldbook::Config;
use pretty_assertions::assert_eq;

#[test]
fn test_test_config_uses_in_memory_database() {
    let config = Config::test_config();

    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.environment, "test");
    assert!(!config.is_production());
    assert!(!config.is_development());
}

#[test]
fn test_server_address_combines_host_and_port() {
    let config = Config {
        database_url: "sqlite:fieldbook.db".to_string(),
        host: "0.0.0.0".to_string(),
        port: 9000,
        environment: "production".to_string(),
        client_base_url: "https://app.example.com".to_string(),
    };

    assert_eq!(config.server_address(), "0.0.0.0:9000");
    assert!(config.is_production());
    assert!(!config.is_development());
}
