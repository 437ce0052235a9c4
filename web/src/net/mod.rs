//! Networking module for REST calls to the resource API.

pub mod api;
