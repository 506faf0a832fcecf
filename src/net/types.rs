//! Wire types for the blog API.
//!
//! The API wraps every response body in a `data` envelope.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A published post. `body` is markdown, rendered client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PostListEnvelope {
    pub data: Vec<Post>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PostEnvelope {
    pub data: Post,
}
