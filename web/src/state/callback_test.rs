use super::*;

// =============================================================================
// next_action — transition guards
// =============================================================================

#[test]
fn init_with_unknown_session_starts_code_exchange() {
    assert_eq!(
        next_action(CallbackPhase::Init, AuthPhase::Unknown),
        Some(CallbackAction::ExchangeCode)
    );
}

#[test]
fn init_with_resolved_session_loads_stored_user() {
    assert_eq!(
        next_action(CallbackPhase::Init, AuthPhase::Authenticated),
        Some(CallbackAction::LoadStoredUser)
    );
}

#[test]
fn init_with_unauthenticated_session_starts_nothing() {
    assert_eq!(next_action(CallbackPhase::Init, AuthPhase::Unauthenticated), None);
}

#[test]
fn in_flight_and_terminal_phases_never_start_work() {
    // The duplicate-call guard: once a phase has been entered, re-evaluating
    // with any tri-state value must be a no-op.
    let phases = [
        CallbackPhase::ResolvingSession,
        CallbackPhase::FetchingApi,
        CallbackPhase::Done,
        CallbackPhase::Failed,
    ];
    let auths = [AuthPhase::Unknown, AuthPhase::Authenticated, AuthPhase::Unauthenticated];
    for phase in phases {
        for auth in auths {
            assert_eq!(next_action(phase, auth), None, "{phase:?}/{auth:?}");
        }
    }
}

// =============================================================================
// callback_render — pure render decision
// =============================================================================

#[test]
fn renders_profile_once_authenticated_with_response() {
    assert_eq!(
        callback_render(AuthPhase::Authenticated, true, CallbackPhase::Done),
        CallbackRender::Profile
    );
}

#[test]
fn renders_loading_while_authenticated_without_response() {
    assert_eq!(
        callback_render(AuthPhase::Authenticated, false, CallbackPhase::FetchingApi),
        CallbackRender::Loading
    );
}

#[test]
fn renders_loading_before_resolution() {
    assert_eq!(
        callback_render(AuthPhase::Unknown, false, CallbackPhase::Init),
        CallbackRender::Loading
    );
}

#[test]
fn renders_diagnostic_after_failed_resolution() {
    assert_eq!(
        callback_render(AuthPhase::Unauthenticated, true, CallbackPhase::Failed),
        CallbackRender::Diagnostic
    );
}

#[test]
fn render_is_pure_over_identical_inputs() {
    let first = callback_render(AuthPhase::Authenticated, true, CallbackPhase::Done);
    let second = callback_render(AuthPhase::Authenticated, true, CallbackPhase::Done);
    assert_eq!(first, second);
}
