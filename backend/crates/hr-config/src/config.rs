use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, HandlerConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub handler: HandlerConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. HR_CONFIG_DIR env var, else ./.hr/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. config.toml if it exists, else defaults
    /// 4. HR_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: HR_CONFIG_DIR env var > ./.hr/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.handler.validate()?;
        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Log file path when file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: secret {}, leeway={}s, {} public procedure(s)",
            if self.auth.jwt_secret.is_some() {
                "configured"
            } else {
                "MISSING"
            },
            self.auth.leeway_secs,
            self.auth.public_procedures.len()
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!("  handler: timeout={}s", self.handler.timeout_secs);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("HR_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("HR_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("HR_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "HR_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("HR_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("HR_AUTH_LEEWAY_SECS", &mut self.auth.leeway_secs);
        Self::apply_env_list(
            "HR_AUTH_PUBLIC_PROCEDURES",
            &mut self.auth.public_procedures,
        );

        // Logging
        Self::apply_env_parse("HR_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("HR_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("HR_LOG_FILE", &mut self.logging.file);

        // Handler
        Self::apply_env_parse("HR_HANDLER_TIMEOUT_SECS", &mut self.handler.timeout_secs);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Comma-separated; an empty value clears the list
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
