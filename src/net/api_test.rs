use super::*;

#[test]
fn posts_url_joins_the_configured_base() {
    let config = ApiConfig::new("http://api.elixir.local:4000/api/");
    assert_eq!(
        posts_url(&config),
        "http://api.elixir.local:4000/api/posts"
    );
}

#[test]
fn post_url_formats_the_id_segment() {
    let config = ApiConfig::new("http://api.elixir.local:4000/api/");
    assert_eq!(
        post_url(&config, "42"),
        "http://api.elixir.local:4000/api/posts/42"
    );
}

#[test]
fn same_origin_config_yields_relative_urls() {
    let config = ApiConfig::same_origin();
    assert_eq!(posts_url(&config), "/posts");
    assert_eq!(post_url(&config, "7"), "/posts/7");
}
