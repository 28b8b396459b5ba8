//! Bearer-credential authentication and identity resolution.
//!
//! Flow for a protected call: [`credential_parser`] extracts the token,
//! [`CredentialValidator`] verifies it and yields the subject,
//! [`IdentityResolver`] maps the subject to a stored [`hr_core::User`]
//! (creating it on first contact) and [`AuthInterceptor`] attaches the user id
//! to the request, where handlers read it back with [`current_user_id`].

pub mod auth_stage;
pub mod claims;
pub mod credential_parser;
pub mod credential_validator;
pub mod error;
pub mod identity_context;
pub mod identity_resolver;
pub mod interceptor;
pub mod user_store;

pub use auth_stage::AuthStage;
pub use claims::Claims;
pub use credential_parser::{parse_authorization_header, parse_bearer};
pub use credential_validator::CredentialValidator;
pub use error::{AuthError, Result};
pub use identity_context::current_user_id;
pub use identity_resolver::IdentityResolver;
pub use interceptor::{AuthInterceptor, AuthOutcome, PublicProcedures};
pub use user_store::{UserStore, UserStoreError};

#[cfg(test)]
mod tests;
