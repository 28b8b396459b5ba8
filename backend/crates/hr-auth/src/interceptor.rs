use crate::{
    AuthError, AuthStage, CredentialValidator, IdentityResolver, Result as AuthErrorResult,
    identity_context,
};

use std::collections::HashSet;
use std::sync::Arc;

use http::{HeaderMap, Request};
use log::{debug, trace};
use uuid::Uuid;

/// Procedures that bypass authentication, matched against the request path.
#[derive(Debug, Clone, Default)]
pub struct PublicProcedures {
    procedures: HashSet<String>,
}

impl PublicProcedures {
    pub fn new<I, S>(procedures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            procedures: procedures.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, procedure: &str) -> bool {
        self.procedures.contains(procedure)
    }

    pub fn len(&self) -> usize {
        self.procedures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procedures.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Allow-listed procedure; no identity attached
    Public,
    Authenticated { user_id: Uuid },
}

/// Authenticates every call to a procedure that is not allow-listed.
///
/// On success the internal user id is attached to the request extensions,
/// where [`crate::current_user_id`] reads it. On failure the request is left
/// untouched and the caller must not invoke the handler.
#[derive(Clone)]
pub struct AuthInterceptor {
    validator: Arc<CredentialValidator>,
    resolver: IdentityResolver,
    public_procedures: PublicProcedures,
}

impl AuthInterceptor {
    pub fn new(
        validator: CredentialValidator,
        resolver: IdentityResolver,
        public_procedures: PublicProcedures,
    ) -> Self {
        Self {
            validator: Arc::new(validator),
            resolver,
            public_procedures,
        }
    }

    pub fn is_public(&self, procedure: &str) -> bool {
        self.public_procedures.contains(procedure)
    }

    pub fn public_procedures(&self) -> &PublicProcedures {
        &self.public_procedures
    }

    pub async fn intercept<B>(&self, request: &mut Request<B>) -> AuthErrorResult<AuthOutcome> {
        let procedure = request.uri().path();
        if self.is_public(procedure) {
            trace!("{procedure} is public, skipping authentication");
            return Ok(AuthOutcome::Public);
        }

        let mut stage = AuthStage::Received;
        let result = self.authenticate(request.headers(), &mut stage).await;
        match result {
            Ok(user_id) => {
                advance(&mut stage, AuthStage::Authenticated);
                identity_context::attach(request.extensions_mut(), user_id);
                Ok(AuthOutcome::Authenticated { user_id })
            }
            Err(e) => {
                advance(&mut stage, AuthStage::Rejected);
                Err(e)
            }
        }
    }

    async fn authenticate(
        &self,
        headers: &HeaderMap,
        stage: &mut AuthStage,
    ) -> Result<Uuid, AuthError> {
        advance(stage, AuthStage::Parsing);
        let token = crate::parse_authorization_header(headers)?;

        advance(stage, AuthStage::Validating);
        let subject = self.validator.validate(&token)?;

        advance(stage, AuthStage::Resolving);
        let user = self.resolver.resolve(&subject).await?;

        debug!("Resolved subject {} to user {}", subject, user.id);
        Ok(user.id)
    }
}

fn advance(stage: &mut AuthStage, next: AuthStage) {
    debug_assert!(stage.can_advance_to(next), "illegal auth transition {stage} -> {next}");
    trace!("auth stage {stage} -> {next}");
    *stage = next;
}
