//! Explicit HTTP-client configuration.
//!
//! DESIGN
//! ======
//! The API root is carried by a plain owned value constructed once in the
//! bootstrap and handed to the view tree by context. Fields are private and
//! there are no setters, so the configured base URL cannot change after
//! startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API root used when no compile-time override is present.
pub const DEFAULT_API_ROOT: &str = "http://api.elixir.local:4000/api/";

/// Base-URL configuration for all HTTP requests issued by the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_owned(),
        }
    }

    /// Same-origin variant: requests resolve against the serving host.
    pub fn same_origin() -> Self {
        Self::new("/")
    }

    /// Resolve the configuration for this build.
    ///
    /// `WAYPOST_API_ROOT` set at compile time overrides the default; an
    /// empty value selects the same-origin root.
    pub fn from_env() -> Self {
        match option_env!("WAYPOST_API_ROOT") {
            Some("") => Self::same_origin(),
            Some(root) => Self::new(root),
            None => Self::new(DEFAULT_API_ROOT),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL with a relative endpoint path.
    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}
