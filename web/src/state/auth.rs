//! Authentication tri-state shared by the routed views.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Three-valued session flag distinguishing "not yet known" from both
/// resolved outcomes. Starts at `Unknown` and settles once the first
/// asynchronous session lookup completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

impl AuthPhase {
    /// Resolved phase for a session-lookup outcome.
    #[must_use]
    pub fn from_user_presence(present: bool) -> Self {
        if present { Self::Authenticated } else { Self::Unauthenticated }
    }

    #[must_use]
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}
