use crate::RpcError;

use hr_auth::current_user_id;

use axum::extract::FromRequestParts;
use http::request::Parts;
use log::error;
use uuid::Uuid;

/// Internal id of the authenticated caller.
///
/// Only valid behind the authentication layer. Extracting it anywhere else
/// (including public procedures) is a handler defect and fails closed with
/// `internal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub Uuid);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = RpcError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        current_user_id(&parts.extensions)
            .map(CurrentUser)
            .map_err(|e| {
                error!("No identity on {}: {e}", parts.uri.path());
                RpcError::from(e)
            })
    }
}
