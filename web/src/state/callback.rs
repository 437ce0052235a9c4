//! Callback-view progression as an explicit state machine.
//!
//! DESIGN
//! ======
//! The redirect callback advances Init → ResolvingSession → FetchingApi →
//! Done, or lands in Failed when the session cannot be resolved. In-flight
//! phases are entered synchronously before any await point, so a re-render
//! while a request is outstanding can never start a second one.

#[cfg(test)]
#[path = "callback_test.rs"]
mod callback_test;

use crate::state::auth::AuthPhase;

/// Progress of the redirect-callback view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CallbackPhase {
    /// Nothing started yet.
    #[default]
    Init,
    /// Code exchange or stored-session lookup in flight.
    ResolvingSession,
    /// Session resolved; protected API call in flight.
    FetchingApi,
    /// API response (or its diagnostic substitute) available.
    Done,
    /// Session could not be resolved.
    Failed,
}

/// Asynchronous work the callback view may start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackAction {
    /// Exchange the authorization code carried in the redirect query.
    ExchangeCode,
    /// Load the user stored by an earlier exchange (component remount).
    LoadStoredUser,
}

/// Decide what to start next. Only `Init` produces work; every in-flight or
/// terminal phase maps to `None`, which guarantees at most one exchange and
/// one API call per mount.
#[must_use]
pub fn next_action(phase: CallbackPhase, auth: AuthPhase) -> Option<CallbackAction> {
    match (phase, auth) {
        (CallbackPhase::Init, AuthPhase::Unknown) => Some(CallbackAction::ExchangeCode),
        (CallbackPhase::Init, AuthPhase::Authenticated) => Some(CallbackAction::LoadStoredUser),
        _ => None,
    }
}

/// What the callback page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackRender {
    Loading,
    /// Session resolution failed; show the diagnostic instead of spinning.
    Diagnostic,
    /// Profile, API response, and the logout control.
    Profile,
}

/// Pure render decision: profile once authenticated with an API response in
/// hand, the diagnostic after a failed resolution, loading otherwise.
#[must_use]
pub fn callback_render(auth: AuthPhase, has_response: bool, phase: CallbackPhase) -> CallbackRender {
    if auth.is_authenticated() && has_response {
        CallbackRender::Profile
    } else if phase == CallbackPhase::Failed {
        CallbackRender::Diagnostic
    } else {
        CallbackRender::Loading
    }
}
