use std::fmt;

/// Progress of a single call through the interceptor.
///
/// `Received -> Parsing -> Validating -> Resolving -> Authenticated`, or
/// `Rejected` from any intermediate stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStage {
    Received,
    Parsing,
    Validating,
    Resolving,
    Authenticated,
    Rejected,
}

impl AuthStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Parsing => "parsing",
            Self::Validating => "validating",
            Self::Resolving => "resolving",
            Self::Authenticated => "authenticated",
            Self::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Authenticated | Self::Rejected)
    }

    /// Whether `next` is a legal successor of `self`
    pub fn can_advance_to(&self, next: AuthStage) -> bool {
        matches!(
            (self, next),
            (Self::Received, Self::Parsing)
                | (Self::Parsing, Self::Validating)
                | (Self::Validating, Self::Resolving)
                | (Self::Resolving, Self::Authenticated)
                | (Self::Parsing | Self::Validating | Self::Resolving, Self::Rejected)
        )
    }
}

impl fmt::Display for AuthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
