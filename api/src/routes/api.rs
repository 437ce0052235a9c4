//! Public and token-protected message endpoints.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::services::introspect::{self, IntrospectError, TokenInfo};
use crate::state::AppState;

/// Message payload returned by both endpoints.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

/// Error payload for rejected tokens.
#[derive(Debug, Serialize)]
pub struct AuthErrorBody {
    pub code: String,
    pub description: String,
}

/// Extract the bearer credential from an `Authorization` header value.
pub(crate) fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Map a token failure to its HTTP response.
pub(crate) fn auth_error_response(err: &IntrospectError) -> Response {
    let status = match err {
        IntrospectError::Request(_) => StatusCode::BAD_GATEWAY,
        IntrospectError::InvalidToken(_) | IntrospectError::Expired => StatusCode::UNAUTHORIZED,
    };
    let body = AuthErrorBody { code: err.code().to_owned(), description: err.to_string() };
    (status, Json(body)).into_response()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated caller, established by introspecting the bearer token.
/// Use as a handler parameter to require a valid token.
pub struct AuthUser {
    pub token_info: TokenInfo,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let Some(config) = &state.introspection else {
            return Err(
                (StatusCode::SERVICE_UNAVAILABLE, "token introspection not configured").into_response()
            );
        };

        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .unwrap_or_default();

        let token_info = introspect::check_token(&state.http, config, token)
            .await
            .map_err(|e| auth_error_response(&e))?;
        Ok(Self { token_info })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/public` — no authentication required.
pub async fn public() -> Json<Message> {
    Json(Message { message: "public".to_owned() })
}

/// `GET /api/private` — requires a valid bearer token.
pub async fn private(auth: AuthUser) -> Json<Message> {
    if let Some(sub) = &auth.token_info.sub {
        tracing::debug!(%sub, "private endpoint hit");
    }
    Json(Message { message: "private".to_owned() })
}
