use super::*;

fn config() -> AuthConfig {
    AuthConfig::new("https://idp.example.com", "web-client", "http://localhost:8080/login-callback")
}

#[test]
fn new_strips_trailing_slash_from_authority() {
    let config = AuthConfig::new("https://idp.example.com/", "c", "r");
    assert_eq!(config.authority, "https://idp.example.com");
}

#[test]
fn new_requests_openid_profile_email() {
    assert_eq!(config().scope, "openid profile email");
}

#[test]
fn endpoints_derive_from_authority() {
    let config = config();
    assert_eq!(config.authorize_endpoint(), "https://idp.example.com/oauth/v2/authorize");
    assert_eq!(config.token_endpoint(), "https://idp.example.com/oauth/v2/token");
    assert_eq!(config.userinfo_endpoint(), "https://idp.example.com/oidc/v1/userinfo");
    assert_eq!(config.end_session_endpoint(), "https://idp.example.com/oidc/v1/end_session");
}
