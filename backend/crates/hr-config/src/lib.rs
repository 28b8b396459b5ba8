mod auth_config;
mod config;
mod database_config;
mod error;
mod handler_config;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use handler_config::HandlerConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "HR_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".hr";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "health_records.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 8;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 64;

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_LEEWAY_SECS: u64 = 30;
const MAX_LEEWAY_SECS: u64 = 300;
/// Procedures callable without a credential unless configured otherwise
pub const DEFAULT_PUBLIC_PROCEDURES: [&str; 2] = [
    "/healthrecords.v1.ArticleService/ListArticles",
    "/healthrecords.v1.ArticleService/GetArticle",
];

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
