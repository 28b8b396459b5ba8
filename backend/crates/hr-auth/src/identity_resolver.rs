use crate::{AuthError, Result as AuthErrorResult, UserStore, UserStoreError};

use hr_core::User;

use std::sync::Arc;

use log::{debug, warn};

/// Maps an external subject to the internal user, provisioning it on first
/// contact.
///
/// Uniqueness under concurrency comes from the store's constraint on the
/// subject: the insert that loses a race reports a conflict and the resolver
/// reads the winner's row. There is no in-process lock and no caching.
#[derive(Clone)]
pub struct IdentityResolver {
    store: Arc<dyn UserStore>,
}

impl IdentityResolver {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn resolve(&self, subject: &str) -> AuthErrorResult<User> {
        // 1. Existing user: no write
        if let Some(user) = self.find(subject).await? {
            return Ok(user);
        }

        // 2. First contact: try to provision
        match self.store.create_user(subject).await {
            Ok(user) => {
                debug!("Provisioned user {} for subject {}", user.id, subject);
                Ok(user)
            }

            // 3. Lost the race: the winner's row must now be visible. Re-read once.
            Err(UserStoreError::UniqueConflict) => {
                debug!("Lost provisioning race for subject {subject}, re-reading");
                match self.find(subject).await? {
                    Some(user) => Ok(user),
                    None => {
                        warn!("Subject conflicted on insert but is missing on re-read");
                        Err(AuthError::identity_provisioning_failed(
                            "user missing after uniqueness conflict",
                        ))
                    }
                }
            }

            Err(UserStoreError::Unavailable { message }) => {
                Err(AuthError::identity_provisioning_failed(message))
            }
        }
    }

    async fn find(&self, subject: &str) -> AuthErrorResult<Option<User>> {
        self.store
            .find_user_by_subject(subject)
            .await
            .map_err(|e| AuthError::identity_provisioning_failed(e.to_string()))
    }
}
