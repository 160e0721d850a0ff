use pretty_assertions::assert_eq;
use rstest::rstest;
use studyplan_api::config::{parse_log_level, parse_origins, ApiConfig};
use tracing::Level;

#[rstest]
#[case("trace", Level::TRACE)]
#[case("DEBUG", Level::DEBUG)]
#[case(" warn ", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("verbose", Level::INFO)]
#[case("", Level::INFO)]
fn test_parse_log_level(#[case] value: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(value), expected);
}

#[test]
fn test_parse_origins_trims_and_skips_blanks() {
    let origins = parse_origins(" http://localhost:5173, ,https://plans.example.com,");

    assert_eq!(
        origins,
        vec![
            "http://localhost:5173".to_string(),
            "https://plans.example.com".to_string()
        ]
    );
}

#[test]
fn test_server_addr() {
    let config = ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        database_url: "postgres://localhost/studyplan".to_string(),
        log_level: Level::INFO,
        cors_origins: None,
        request_timeout: 30,
    };

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
}
