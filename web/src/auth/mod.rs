//! Identity-provider binding: configuration, PKCE material, the stored user
//! model, and the session manager that drives the redirect flow.

pub mod config;
pub mod manager;
pub mod pkce;
pub mod user;
