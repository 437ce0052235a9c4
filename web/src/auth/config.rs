//! Build-time configuration for the identity-provider binding.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Scopes requested on every sign-in.
pub const DEFAULT_SCOPE: &str = "openid profile email";

/// OIDC client settings, fixed at build time.
///
/// Values come from the build environment (`AUTH_URL`, `AUTH_CLIENT_ID`,
/// `AUTH_REDIRECT_URI`), the compile-time analog of a bundler's injected env.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// Identity-provider base URL, without a trailing slash.
    pub authority: String,
    /// OAuth client identifier registered with the provider.
    pub client_id: String,
    /// Callback address the provider returns the browser to.
    pub redirect_uri: String,
    /// Space-separated scope list.
    pub scope: String,
}

impl AuthConfig {
    #[must_use]
    pub fn new(authority: &str, client_id: &str, redirect_uri: &str) -> Self {
        Self {
            authority: authority.trim_end_matches('/').to_owned(),
            client_id: client_id.to_owned(),
            redirect_uri: redirect_uri.to_owned(),
            scope: DEFAULT_SCOPE.to_owned(),
        }
    }

    /// Load from build-time env. Returns `None` if any required value is
    /// missing.
    #[must_use]
    pub fn from_build_env() -> Option<Self> {
        Some(Self::new(
            option_env!("AUTH_URL")?,
            option_env!("AUTH_CLIENT_ID")?,
            option_env!("AUTH_REDIRECT_URI")?,
        ))
    }

    /// ZITADEL authorization endpoint.
    #[must_use]
    pub fn authorize_endpoint(&self) -> String {
        format!("{}/oauth/v2/authorize", self.authority)
    }

    /// ZITADEL token endpoint.
    #[must_use]
    pub fn token_endpoint(&self) -> String {
        format!("{}/oauth/v2/token", self.authority)
    }

    /// ZITADEL userinfo endpoint.
    #[must_use]
    pub fn userinfo_endpoint(&self) -> String {
        format!("{}/oidc/v1/userinfo", self.authority)
    }

    /// ZITADEL end-session endpoint.
    #[must_use]
    pub fn end_session_endpoint(&self) -> String {
        format!("{}/oidc/v1/end_session", self.authority)
    }
}
