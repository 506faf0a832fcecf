//! # waypost
//!
//! Leptos + WASM single-page front end for the Waypost travel blog.
//!
//! The crate owns its routing layer: an ordered route table of
//! lazily-loaded page modules navigated through the browsing history API,
//! an explicit HTTP base-URL configuration carried by value instead of
//! global state, and the pages and components that render on top of them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
