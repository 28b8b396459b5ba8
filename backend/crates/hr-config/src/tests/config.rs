use crate::tests::{EnvGuard, VALID_SECRET, setup_config_dir};
use crate::{Config, DEFAULT_PUBLIC_PROCEDURES};

use googletest::prelude::*;
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Loading
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_defaults() {
    // Given
    let (_temp, _dir, _secret) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.host, eq("127.0.0.1"));
    assert_that!(config.server.port, eq(8080));
    assert_that!(config.database.path, eq("health_records.db"));
    assert_that!(config.auth.leeway_secs, eq(30));
    assert_that!(config.auth.jwt_secret, none());
    assert_that!(config.handler.timeout_secs, eq(30));
    assert_that!(
        config.auth.public_procedures,
        eq(&DEFAULT_PUBLIC_PROCEDURES.map(String::from).to_vec())
    );
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_created() {
    // Given
    let (temp, _dir, _secret) = setup_config_dir();
    let nested = temp.path().join("nested").join(".hr");
    let _nested = EnvGuard::set("HR_CONFIG_DIR", nested.to_str().unwrap());

    // When
    Config::load().unwrap();

    // Then
    assert_that!(nested.is_dir(), eq(true));
}

#[test]
#[serial]
fn given_toml_file_when_load_then_values_applied_and_rest_defaulted() {
    // Given
    let (temp, _dir, _secret) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [server]
              port = 9100

              [auth]
              jwt_secret = "0123456789abcdef0123456789abcdef"
              public_procedures = ["/healthrecords.v1.ArticleService/ListArticles"]

              [logging]
              level = "debug"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9100));
    assert_that!(config.server.host, eq("127.0.0.1"));
    assert_that!(config.auth.public_procedures, len(eq(1)));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_invalid_toml_when_load_then_error_names_file() {
    // Given
    let (temp, _dir, _secret) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nport = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("config.toml")
    );
}

// =========================================================================
// Environment overrides
// =========================================================================

#[test]
#[serial]
fn given_env_overrides_when_load_then_env_wins_over_toml() {
    // Given
    let (temp, _dir, _secret) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[server]\nport = 9100\n[handler]\ntimeout_secs = 10\n",
    )
    .unwrap();
    let _port = EnvGuard::set("HR_SERVER_PORT", "9200");
    let _timeout = EnvGuard::set("HR_HANDLER_TIMEOUT_SECS", "45");
    let _secret_env = EnvGuard::set("HR_AUTH_JWT_SECRET", VALID_SECRET);
    let _colored = EnvGuard::set("HR_LOG_COLORED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9200));
    assert_that!(config.handler.timeout_secs, eq(45));
    assert_that!(config.auth.jwt_secret.as_deref(), some(eq(VALID_SECRET)));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_previous_value_kept() {
    let (_temp, _dir, _secret) = setup_config_dir();
    let _port = EnvGuard::set("HR_SERVER_PORT", "not-a-port");

    let config = Config::load().unwrap();

    assert_that!(config.server.port, eq(8080));
}

#[test]
#[serial]
fn given_public_procedures_env_when_load_then_list_replaced() {
    // Given
    let (_temp, _dir, _secret) = setup_config_dir();
    let _public = EnvGuard::set(
        "HR_AUTH_PUBLIC_PROCEDURES",
        "/healthrecords.v1.ArticleService/GetArticle, /healthrecords.v1.UserService/GetCurrentUser",
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.auth.public_procedures,
        eq(&vec![
            "/healthrecords.v1.ArticleService/GetArticle".to_string(),
            "/healthrecords.v1.UserService/GetCurrentUser".to_string(),
        ])
    );
}

#[test]
#[serial]
fn given_empty_public_procedures_env_when_load_then_every_procedure_protected() {
    let (_temp, _dir, _secret) = setup_config_dir();
    let _public = EnvGuard::set("HR_AUTH_PUBLIC_PROCEDURES", "");

    let config = Config::load().unwrap();

    assert_that!(config.auth.public_procedures, is_empty());
}

// =========================================================================
// Derived paths
// =========================================================================

#[test]
#[serial]
fn given_defaults_when_paths_requested_then_rooted_in_config_dir() {
    // Given
    let (temp, _dir, _secret) = setup_config_dir();
    let _file = EnvGuard::set("HR_LOG_FILE", "server.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.database_path().unwrap(),
        eq(&temp.path().join("health_records.db"))
    );
    assert_that!(
        config.log_file_path().unwrap(),
        some(eq(&temp.path().join("log").join("server.log")))
    );
    assert_that!(config.bind_addr(), eq("127.0.0.1:8080"));
}

#[test]
#[serial]
fn given_secret_configured_when_debug_formatted_then_secret_redacted() {
    let (_temp, _dir, _secret) = setup_config_dir();
    let _secret_env = EnvGuard::set("HR_AUTH_JWT_SECRET", VALID_SECRET);

    let config = Config::load().unwrap();

    let rendered = format!("{config:?}");
    assert_that!(rendered, not(contains_substring(VALID_SECRET)));
    assert_that!(rendered, contains_substring("<redacted>"));
}
