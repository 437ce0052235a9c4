//! # sup-web
//!
//! Leptos + WASM single-page application for the OIDC login demo. Signs the
//! user in against a ZITADEL instance via the authorization-code redirect
//! flow, then calls the companion resource API's protected endpoint with the
//! issued access token.

pub mod app;
pub mod auth;
pub mod net;
pub mod pages;
pub mod state;
