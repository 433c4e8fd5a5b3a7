use serde::Serialize;
use std::fmt;

/// Coarse classification shared by every error enum in the workspace.
///
/// Feature errors map each variant onto one of these, so a front end can decide how to
/// present a failure without matching on every concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// Malformed or rejected input.
    Validation,
    /// Missing session or missing admin role.
    Authorization,
    /// Unknown identifier.
    NotFound,
    /// The entity is not in a state that allows the operation.
    StateConflict,
    /// The backing store failed. Not recoverable by the caller.
    Persistence,
    /// A bug or an environment failure outside the domain.
    Internal,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Authorization => "authorization",
            Self::NotFound => "not_found",
            Self::StateConflict => "state_conflict",
            Self::Persistence => "persistence",
            Self::Internal => "internal",
        }
    }

    /// Fatal kinds abort the current process flow instead of being shown as a user message.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Persistence | Self::Internal)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
