use super::*;

fn manager() -> SessionManager {
    SessionManager::new(AuthConfig::new(
        "https://idp.example.com",
        "web-client",
        "http://localhost:8080/login-callback",
    ))
}

// =============================================================================
// Authorization URL
// =============================================================================

#[test]
fn authorize_url_targets_authorization_endpoint() {
    let url = manager().authorize_url("st4te", "ch4llenge");
    assert!(url.starts_with("https://idp.example.com/oauth/v2/authorize?"));
}

#[test]
fn authorize_url_requests_code_flow_with_pkce() {
    let url = manager().authorize_url("st4te", "ch4llenge");
    assert!(url.contains("response_type=code"));
    assert!(url.contains("client_id=web-client"));
    assert!(url.contains("scope=openid+profile+email"));
    assert!(url.contains("state=st4te"));
    assert!(url.contains("code_challenge=ch4llenge"));
    assert!(url.contains("code_challenge_method=S256"));
}

#[test]
fn authorize_url_escapes_redirect_uri() {
    let url = manager().authorize_url("s", "c");
    assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Flogin-callback"));
}

// =============================================================================
// Callback query parsing
// =============================================================================

#[test]
fn parse_callback_query_extracts_code_and_state() {
    let params = parse_callback_query("?code=abc123&state=xyz").unwrap();
    assert_eq!(params, CallbackParams { code: "abc123".to_owned(), state: "xyz".to_owned() });
}

#[test]
fn parse_callback_query_accepts_missing_leading_question_mark() {
    let params = parse_callback_query("code=abc&state=s").unwrap();
    assert_eq!(params.code, "abc");
}

#[test]
fn parse_callback_query_decodes_percent_escapes() {
    let params = parse_callback_query("?code=a%2Fb&state=x%20y").unwrap();
    assert_eq!(params.code, "a/b");
    assert_eq!(params.state, "x y");
}

#[test]
fn parse_callback_query_rejects_missing_code() {
    assert!(parse_callback_query("?state=only").is_err());
}

#[test]
fn parse_callback_query_rejects_missing_state() {
    assert!(parse_callback_query("?code=only").is_err());
}

#[test]
fn parse_callback_query_surfaces_provider_error() {
    let err = parse_callback_query("?error=access_denied&state=s").unwrap_err();
    assert!(err.contains("access_denied"));
}

// =============================================================================
// Token request body
// =============================================================================

#[test]
fn token_request_body_carries_code_grant_fields() {
    let body = token_request_body(manager().config(), "the-code", "the-verifier");
    assert!(body.contains("grant_type=authorization_code"));
    assert!(body.contains("code=the-code"));
    assert!(body.contains("client_id=web-client"));
    assert!(body.contains("code_verifier=the-verifier"));
    assert!(body.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Flogin-callback"));
}

// =============================================================================
// Logout URL
// =============================================================================

#[test]
fn end_session_url_without_hint() {
    let url = manager().end_session_url(None);
    assert_eq!(url, "https://idp.example.com/oidc/v1/end_session?client_id=web-client");
}

#[test]
fn end_session_url_with_hint() {
    let url = manager().end_session_url(Some("idt-1"));
    assert!(url.contains("id_token_hint=idt-1"));
}
