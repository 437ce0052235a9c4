//! Shared application state.

use std::sync::Arc;

use crate::services::introspect::IntrospectionConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client reused across introspection calls.
    pub http: reqwest::Client,
    /// Introspection credentials. `None` if the ZITADEL env vars are not
    /// configured; the protected route answers 503 in that case.
    pub introspection: Option<Arc<IntrospectionConfig>>,
}

impl AppState {
    #[must_use]
    pub fn new(introspection: Option<IntrospectionConfig>) -> Self {
        Self { http: reqwest::Client::new(), introspection: introspection.map(Arc::new) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_without_config_has_no_introspection() {
        let state = AppState::new(None);
        assert!(state.introspection.is_none());
    }

    #[test]
    fn state_with_config_keeps_it() {
        let config = IntrospectionConfig {
            domain: "https://idp.example.com".to_owned(),
            client_id: "api".to_owned(),
            client_secret: "secret".to_owned(),
        };
        let state = AppState::new(Some(config));
        assert_eq!(state.introspection.unwrap().client_id, "api");
    }
}
