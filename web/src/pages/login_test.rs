use super::*;

#[test]
fn unknown_session_renders_loading() {
    assert_eq!(login_render(AuthPhase::Unknown), LoginRender::Loading);
}

#[test]
fn unauthenticated_session_renders_sign_in_button() {
    assert_eq!(login_render(AuthPhase::Unauthenticated), LoginRender::SignInButton);
}

#[test]
fn authenticated_session_redirects_to_callback() {
    assert_eq!(login_render(AuthPhase::Authenticated), LoginRender::RedirectToCallback);
}
