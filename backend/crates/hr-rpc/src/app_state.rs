use crate::Metrics;

use hr_auth::{AuthInterceptor, CredentialValidator, IdentityResolver, PublicProcedures};
use hr_db::UserRepository;

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared state for RPC handlers and middleware
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub interceptor: AuthInterceptor,
    pub metrics: Metrics,
    /// Deadline applied to every call, authentication included
    pub handler_timeout: Duration,
}

impl AppState {
    pub fn new(pool: SqlitePool, interceptor: AuthInterceptor, handler_timeout: Duration) -> Self {
        Self {
            pool,
            interceptor,
            metrics: Metrics::new(),
            handler_timeout,
        }
    }
}

/// Wire the SQLite user store, credential validator and allow-list into an
/// interceptor.
pub fn build_interceptor<I, S>(
    pool: &SqlitePool,
    jwt_secret: &[u8],
    leeway_secs: u64,
    public_procedures: I,
) -> AuthInterceptor
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let store = Arc::new(UserRepository::new(pool.clone()));
    AuthInterceptor::new(
        CredentialValidator::new(jwt_secret, leeway_secs),
        IdentityResolver::new(store),
        PublicProcedures::new(public_procedures),
    )
}
