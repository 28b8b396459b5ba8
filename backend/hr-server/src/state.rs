use crate::error::Result as ServerErrorResult;

use hr_config::{Config, ConfigError};
use hr_rpc::{AppState, build_interceptor};

use log::info;
use sqlx::SqlitePool;

/// Assemble RPC state from validated configuration and an open pool
pub fn build_app_state(config: &Config, pool: SqlitePool) -> ServerErrorResult<AppState> {
    let secret = config
        .auth
        .jwt_secret_bytes()
        .ok_or_else(|| ConfigError::auth("jwt_secret is required"))?;

    let interceptor = build_interceptor(
        &pool,
        secret,
        config.auth.leeway_secs,
        config.auth.public_procedures.iter().cloned(),
    );
    let public = interceptor.public_procedures();
    if public.is_empty() {
        info!("Authentication enabled, every procedure requires a credential");
    } else {
        info!(
            "Authentication enabled, {} public procedure(s)",
            public.len()
        );
    }

    Ok(AppState::new(pool, interceptor, config.handler.timeout()))
}
