//! Access-token introspection against the identity provider.
//!
//! ARCHITECTURE
//! ============
//! The API never parses tokens locally; every bearer credential is posted to
//! the provider's RFC 7662 introspection endpoint and judged on the returned
//! `active` and `exp` claims.

#[cfg(test)]
#[path = "introspect_test.rs"]
mod introspect_test;

use serde::Deserialize;

/// Introspection credentials loaded from environment.
#[derive(Debug, Clone)]
pub struct IntrospectionConfig {
    pub domain: String,
    pub client_id: String,
    pub client_secret: String,
}

impl IntrospectionConfig {
    /// Load from `ZITADEL_DOMAIN`, `ZITADEL_CLIENT_ID`,
    /// `ZITADEL_CLIENT_SECRET`. Returns `None` if any are missing (token
    /// validation will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let domain = std::env::var("ZITADEL_DOMAIN").ok()?;
        let client_id = std::env::var("ZITADEL_CLIENT_ID").ok()?;
        let client_secret = std::env::var("ZITADEL_CLIENT_SECRET").ok()?;
        Some(Self {
            domain: domain.trim_end_matches('/').to_owned(),
            client_id,
            client_secret,
        })
    }

    /// Introspection endpoint URL.
    #[must_use]
    pub fn introspect_url(&self) -> String {
        format!("{}/oauth/v2/introspect", self.domain)
    }
}

/// Claims returned by the introspection endpoint. Unknown claims are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenInfo {
    /// Whether the provider still considers the token valid.
    #[serde(default)]
    pub active: bool,
    /// Expiry as unix seconds.
    pub exp: Option<i64>,
    /// Subject the token was issued to.
    pub sub: Option<String>,
    /// Preferred username claim, if the provider includes it.
    pub username: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum IntrospectError {
    #[error("introspection request failed: {0}")]
    Request(String),
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),
    #[error("token has expired")]
    Expired,
}

impl IntrospectError {
    /// Error code carried in the JSON error body.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Request(_) => "introspection_failed",
            Self::InvalidToken(_) => "invalid_token",
            Self::Expired => "invalid_token_expired",
        }
    }
}

/// POST the token to the provider's introspection endpoint.
pub async fn introspect_token(
    http: &reqwest::Client,
    config: &IntrospectionConfig,
    token: &str,
) -> Result<TokenInfo, IntrospectError> {
    let resp = http
        .post(config.introspect_url())
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("token", token),
            ("token_type_hint", "access_token"),
            ("scope", "openid"),
        ])
        .send()
        .await
        .map_err(|e| IntrospectError::Request(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(IntrospectError::Request(format!("status {}", resp.status())));
    }
    resp.json::<TokenInfo>()
        .await
        .map_err(|e| IntrospectError::Request(e.to_string()))
}

/// Judge an introspection result at a given unix time.
pub fn validate_token(info: &TokenInfo, now: i64) -> Result<(), IntrospectError> {
    if !info.active {
        return Err(IntrospectError::InvalidToken("active is false"));
    }
    if info.exp.is_some_and(|exp| exp < now) {
        return Err(IntrospectError::Expired);
    }
    Ok(())
}

/// Introspect and validate in one step.
pub async fn check_token(
    http: &reqwest::Client,
    config: &IntrospectionConfig,
    token: &str,
) -> Result<TokenInfo, IntrospectError> {
    if token.is_empty() {
        return Err(IntrospectError::InvalidToken("missing token"));
    }
    let info = introspect_token(http, config, token).await?;
    validate_token(&info, time::OffsetDateTime::now_utc().unix_timestamp())?;
    Ok(info)
}
