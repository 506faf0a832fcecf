//! Card linking to a single post in the post list.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;

use super::nav_link::NavLink;
use crate::app::ROUTE_POST;
use crate::net::types::Post;
use crate::router::{Navigator, RouteParams};

const EXCERPT_LEN: usize = 140;

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let navigator = expect_context::<Navigator>();
    let id = post.id.to_string();
    let href = navigator
        .path_for(ROUTE_POST, &RouteParams::from([("id", id.as_str())]))
        .unwrap_or_else(|| "/posts".to_owned());
    let summary = excerpt(&post.body);

    view! {
        <article class="post-card">
            <h2 class="post-card__title">
                <NavLink href=href>{post.title.clone()}</NavLink>
            </h2>
            {post
                .published_at
                .clone()
                .map(|date| view! { <time class="post-card__date">{date}</time> })}
            <p class="post-card__excerpt">{summary}</p>
        </article>
    }
}

/// First body paragraph, clipped for the card.
fn excerpt(body: &str) -> String {
    let first = body
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .unwrap_or_default();
    if first.chars().count() <= EXCERPT_LEN {
        first.to_owned()
    } else {
        let clipped: String = first.chars().take(EXCERPT_LEN).collect();
        format!("{}…", clipped.trim_end())
    }
}
