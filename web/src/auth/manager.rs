//! Session manager wrapping the provider's redirect-based code flow.
//!
//! ARCHITECTURE
//! ============
//! One instance is created at process start and shared through context. It
//! owns the local-storage keys for the persisted session and for the
//! transient state/PKCE material written just before the provider redirect,
//! mirroring how the server side of a code flow round-trips its state cookie.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use serde::Deserialize;
use uuid::Uuid;

use crate::auth::config::AuthConfig;
use crate::auth::pkce;
use crate::auth::user::{Profile, User};

const USER_KEY: &str = "session.user";
const STATE_KEY: &str = "signin.state";
const VERIFIER_KEY: &str = "signin.pkce_verifier";

/// Authorization-code response parameters extracted from the callback URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackParams {
    pub code: String,
    pub state: String,
}

/// Extract `code` and `state` from the redirect query string. The provider
/// reports failures with `error` instead of a code.
pub fn parse_callback_query(query: &str) -> Result<CallbackParams, String> {
    let mut code = None;
    let mut state = None;
    let mut error = None;
    for (key, value) in url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }
    if let Some(error) = error {
        return Err(format!("provider returned error: {error}"));
    }
    match (code, state) {
        (Some(code), Some(state)) => Ok(CallbackParams { code, state }),
        _ => Err("callback query missing code or state".to_owned()),
    }
}

/// Form body for the authorization-code grant.
pub(crate) fn token_request_body(config: &AuthConfig, code: &str, verifier: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("grant_type", "authorization_code")
        .append_pair("code", code)
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("client_id", &config.client_id)
        .append_pair("code_verifier", verifier)
        .finish()
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    id_token: Option<String>,
}

/// Wraps the identity provider's redirect-based authorization-code flow.
pub struct SessionManager {
    config: AuthConfig,
}

impl SessionManager {
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Authorization request URL for a given state and S256 challenge.
    #[must_use]
    pub fn authorize_url(&self, state: &str, code_challenge: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", &self.config.scope)
            .append_pair("state", state)
            .append_pair("code_challenge", code_challenge)
            .append_pair("code_challenge_method", "S256")
            .finish();
        format!("{}?{query}", self.config.authorize_endpoint())
    }

    /// Logout URL with an optional id-token hint.
    #[must_use]
    pub fn end_session_url(&self, id_token_hint: Option<&str>) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair("client_id", &self.config.client_id);
        if let Some(hint) = id_token_hint {
            query.append_pair("id_token_hint", hint);
        }
        format!("{}?{}", self.config.end_session_endpoint(), query.finish())
    }

    /// Return the stored user, if any.
    pub async fn get_user(&self) -> Result<Option<User>, String> {
        let storage = storage()?;
        let Some(raw) = storage
            .get_item(USER_KEY)
            .map_err(|_| "storage read failed".to_owned())?
        else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| format!("stored session is corrupt: {e}"))
    }

    /// Navigate away to the provider's authorization page.
    pub fn signin_redirect(&self) {
        let state = Uuid::new_v4().simple().to_string();
        let verifier = pkce::generate_verifier();
        let url = self.authorize_url(&state, &pkce::code_challenge(&verifier));

        if let Ok(storage) = storage() {
            let _ = storage.set_item(STATE_KEY, &state);
            let _ = storage.set_item(VERIFIER_KEY, &verifier);
        }
        navigate(&url);
    }

    /// Complete the redirect flow: verify state, exchange the code, resolve
    /// the profile, persist the session. Only meaningful on the callback
    /// path.
    pub async fn signin_redirect_callback(&self) -> Result<Option<User>, String> {
        let query = current_query().ok_or_else(|| "window location unavailable".to_owned())?;
        let params = parse_callback_query(&query)?;

        let storage = storage()?;
        let expected_state = storage.get_item(STATE_KEY).ok().flatten().unwrap_or_default();
        let verifier = storage.get_item(VERIFIER_KEY).ok().flatten().unwrap_or_default();
        let _ = storage.remove_item(STATE_KEY);
        let _ = storage.remove_item(VERIFIER_KEY);
        if expected_state.is_empty() || expected_state != params.state {
            return Err("state mismatch in callback".to_owned());
        }

        let tokens = self.exchange_code(&params.code, &verifier).await?;
        let profile = self.fetch_profile(&tokens.access_token).await?;

        let user = User {
            profile,
            access_token: tokens.access_token,
            id_token: tokens.id_token,
        };
        let raw = serde_json::to_string(&user).map_err(|e| e.to_string())?;
        storage
            .set_item(USER_KEY, &raw)
            .map_err(|_| "storage write failed".to_owned())?;
        Ok(Some(user))
    }

    /// Clear the stored session and navigate to the provider's logout page.
    pub fn signout_redirect(&self) {
        let mut id_token = None;
        if let Ok(storage) = storage() {
            if let Ok(Some(raw)) = storage.get_item(USER_KEY) {
                id_token = serde_json::from_str::<User>(&raw)
                    .ok()
                    .and_then(|user| user.id_token);
            }
            let _ = storage.remove_item(USER_KEY);
        }
        navigate(&self.end_session_url(id_token.as_deref()));
    }

    /// POST the token endpoint with the authorization-code grant.
    async fn exchange_code(&self, code: &str, verifier: &str) -> Result<TokenResponse, String> {
        let body = token_request_body(&self.config, code, verifier);
        let resp = gloo_net::http::Request::post(&self.config.token_endpoint())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| format!("token request build failed: {e}"))?
            .send()
            .await
            .map_err(|e| format!("token request failed: {e}"))?;
        if !resp.ok() {
            return Err(format!("token endpoint returned {}", resp.status()));
        }
        resp.json::<TokenResponse>()
            .await
            .map_err(|e| format!("token response parse failed: {e}"))
    }

    /// GET the userinfo endpoint with the freshly issued access token.
    async fn fetch_profile(&self, access_token: &str) -> Result<Profile, String> {
        let resp = gloo_net::http::Request::get(&self.config.userinfo_endpoint())
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| format!("userinfo request failed: {e}"))?;
        if !resp.ok() {
            return Err(format!("userinfo endpoint returned {}", resp.status()));
        }
        resp.json::<Profile>()
            .await
            .map_err(|e| format!("userinfo parse failed: {e}"))
    }
}

fn storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or_else(|| "window unavailable".to_owned())?
        .local_storage()
        .map_err(|_| "local storage unavailable".to_owned())?
        .ok_or_else(|| "local storage disabled".to_owned())
}

fn current_query() -> Option<String> {
    web_sys::window()?.location().search().ok()
}

fn navigate(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}
