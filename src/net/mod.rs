//! Networking modules for the blog API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the configured base URL and `types`
//! defines the wire schema the API serves.

pub mod api;
pub mod types;
