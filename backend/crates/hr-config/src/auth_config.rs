use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LEEWAY_SECS, DEFAULT_PUBLIC_PROCEDURES,
    MAX_LEEWAY_SECS, MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Shared HMAC secret used to verify credentials. Never logged.
    pub jwt_secret: Option<String>,
    /// Clock skew tolerated on `exp`/`nbf`
    pub leeway_secs: u64,
    /// Procedures (`/<package>.<Service>/<Method>`) that skip authentication
    pub public_procedures: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            leeway_secs: DEFAULT_LEEWAY_SECS,
            public_procedures: DEFAULT_PUBLIC_PROCEDURES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

// Manual Debug so the secret never reaches a log line
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("leeway_secs", &self.leeway_secs)
            .field("public_procedures", &self.public_procedures)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set HR_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.chars().count() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {MIN_JWT_SECRET_LENGTH} characters"
                )));
            }
            Some(_) => {}
        }

        if self.leeway_secs > MAX_LEEWAY_SECS {
            return Err(ConfigError::auth(format!(
                "auth.leeway_secs must be at most {}, got {}",
                MAX_LEEWAY_SECS, self.leeway_secs
            )));
        }

        for procedure in &self.public_procedures {
            if !is_procedure_path(procedure) {
                return Err(ConfigError::auth(format!(
                    "auth.public_procedures entry '{procedure}' must look like /<service>/<method>"
                )));
            }
        }

        Ok(())
    }

    /// Secret bytes for the credential validator
    pub fn jwt_secret_bytes(&self) -> Option<&[u8]> {
        self.jwt_secret.as_deref().map(str::as_bytes)
    }
}

/// `/<service>/<method>` with both segments non-empty and free of whitespace
fn is_procedure_path(value: &str) -> bool {
    let Some(rest) = value.strip_prefix('/') else {
        return false;
    };
    let mut segments = rest.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(service), Some(method), None) => [service, method]
            .iter()
            .all(|s| !s.is_empty() && !s.chars().any(char::is_whitespace)),
        _ => false,
    }
}
