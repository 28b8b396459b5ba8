use hr_core::User;
use hr_db::{DbError, UserRepository};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserStoreError {
    /// Another writer inserted the same subject first
    #[error("user with this subject already exists")]
    UniqueConflict,

    #[error("user store unavailable: {message}")]
    Unavailable { message: String },
}

/// Persistence used by identity resolution.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_subject(&self, subject: &str) -> Result<Option<User>, UserStoreError>;

    /// Insert a new user for `subject` as a single atomic statement.
    async fn create_user(&self, subject: &str) -> Result<User, UserStoreError>;
}

impl From<DbError> for UserStoreError {
    fn from(error: DbError) -> Self {
        if error.is_unique_violation() {
            Self::UniqueConflict
        } else {
            Self::Unavailable {
                message: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_user_by_subject(&self, subject: &str) -> Result<Option<User>, UserStoreError> {
        Ok(self.find_by_subject(subject).await?)
    }

    async fn create_user(&self, subject: &str) -> Result<User, UserStoreError> {
        let user = User::new(subject);
        self.create(&user).await?;
        Ok(user)
    }
}
