use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use http::Extensions;
use uuid::Uuid;

/// Extension key for the resolved caller. Private so nothing outside this
/// crate can forge an identity on a request.
#[derive(Debug, Clone, Copy)]
struct ResolvedIdentity(Uuid);

pub(crate) fn attach(extensions: &mut Extensions, user_id: Uuid) {
    extensions.insert(ResolvedIdentity(user_id));
}

/// Internal id of the authenticated caller.
///
/// Fails closed: a request that never passed authentication (or a public
/// procedure) yields `IdentityNotPresent`.
#[track_caller]
pub fn current_user_id(extensions: &Extensions) -> AuthErrorResult<Uuid> {
    extensions
        .get::<ResolvedIdentity>()
        .map(|identity| identity.0)
        .ok_or_else(|| AuthError::IdentityNotPresent {
            location: ErrorLocation::from(Location::caller()),
        })
}
