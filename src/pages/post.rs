//! Single-post page rendering the post body as markdown.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use std::rc::Rc;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::config::ApiConfig;
use crate::net::api;
use crate::router::PageModule;

pub fn module() -> PageModule {
    Rc::new(|params| {
        let id = params.get("id").unwrap_or_default().to_owned();
        view! { <PostPage id=id/> }.into_any()
    })
}

#[component]
pub fn PostPage(id: String) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let post = LocalResource::new(move || {
        let config = config.clone();
        let id = id.clone();
        async move { api::fetch_post(&config, &id).await }
    });

    view! {
        <article class="post-page">
            <Suspense fallback=move || view! { <p class="post-page__status">"Loading post..."</p> }>
                {move || {
                    post.get()
                        .map(|fetched| match fetched {
                            Some(post) => {
                                let rendered = render_markdown(&post.body);
                                view! {
                                    <h1 class="post-page__title">{post.title.clone()}</h1>
                                    {post
                                        .published_at
                                        .clone()
                                        .map(|date| view! { <time class="post-page__date">{date}</time> })}
                                    <div class="post-page__body" inner_html=rendered></div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <p class="post-page__status post-page__status--error">
                                        "Post not found."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </article>
    }
}

/// Render post markdown to HTML.
fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Drop inline/block raw HTML from the post source before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
