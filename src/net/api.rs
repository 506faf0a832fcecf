//! REST API helpers for the blog backend.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`. Native builds:
//! stubs returning `None` so the crate tests without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so fetch failures degrade
//! to empty page states without crashing the app.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::ApiConfig;
#[cfg(feature = "csr")]
use super::types::{PostEnvelope, PostListEnvelope};
use super::types::Post;

/// Request URL for the post list.
pub fn posts_url(config: &ApiConfig) -> String {
    config.url("posts")
}

/// Request URL for a single post.
pub fn post_url(config: &ApiConfig, id: &str) -> String {
    config.url(&format!("posts/{id}"))
}

/// Fetch all posts. Returns `None` on any transport or decode failure.
pub async fn fetch_posts(config: &ApiConfig) -> Option<Vec<Post>> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&posts_url(config))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<PostListEnvelope>().await.ok().map(|e| e.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        None
    }
}

/// Fetch one post by id. Returns `None` if it does not exist or on failure.
pub async fn fetch_post(config: &ApiConfig, id: &str) -> Option<Post> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&post_url(config, id))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<PostEnvelope>().await.ok().map(|e| e.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, id);
        None
    }
}
