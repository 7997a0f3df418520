// src/client/mod.rs
//
// Browser-equivalent flows expressed as plain Rust: the quiz state
// machine, the typed API client, and the admin-panel flow.

pub mod admin;
pub mod api;
pub mod quiz;
