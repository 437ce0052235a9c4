//! Authenticated-user model persisted in browser local storage.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};

/// Identity claims returned by the provider's userinfo endpoint.
///
/// Unknown claims are ignored; `name` and `email` are optional because the
/// provider only includes them when the matching scopes were granted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Subject identifier, stable per user.
    pub sub: String,
    /// Display name claim.
    pub name: Option<String>,
    /// Email claim.
    pub email: Option<String>,
}

/// Resolved session: identity claims plus the tokens issued with them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub profile: Profile,
    /// Bearer credential presented to the resource API.
    pub access_token: String,
    /// Identity token, kept as the provider's logout hint.
    pub id_token: Option<String>,
}
