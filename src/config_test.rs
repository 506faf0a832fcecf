use super::*;

// =============================================================
// Base URL handling
// =============================================================

#[test]
fn config_keeps_configured_base_url_verbatim() {
    let config = ApiConfig::new(DEFAULT_API_ROOT);
    assert_eq!(config.base_url(), "http://api.elixir.local:4000/api/");
}

#[test]
fn url_joins_with_single_slash() {
    let config = ApiConfig::new("http://api.elixir.local:4000/api/");
    assert_eq!(
        config.url("posts"),
        "http://api.elixir.local:4000/api/posts"
    );
}

#[test]
fn url_joins_base_without_trailing_slash() {
    let config = ApiConfig::new("http://api.elixir.local:4000/api");
    assert_eq!(
        config.url("/posts"),
        "http://api.elixir.local:4000/api/posts"
    );
}

#[test]
fn same_origin_urls_are_absolute_paths() {
    let config = ApiConfig::same_origin();
    assert_eq!(config.url("posts"), "/posts");
    assert_eq!(config.url("posts/7"), "/posts/7");
}
