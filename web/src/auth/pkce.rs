//! PKCE verifier/challenge pair for the authorization-code flow.

#[cfg(test)]
#[path = "pkce_test.rs"]
mod pkce_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a fresh code verifier: 64 unreserved hex characters.
#[must_use]
pub fn generate_verifier() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// S256 code challenge for a verifier.
#[must_use]
pub fn code_challenge(verifier: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes()))
}
