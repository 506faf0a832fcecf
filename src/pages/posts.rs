//! Post list page.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::config::ApiConfig;
use crate::net::api;
use crate::router::PageModule;

pub fn module() -> PageModule {
    Rc::new(|_params| view! { <PostsPage/> }.into_any())
}

#[component]
pub fn PostsPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();

    // Post list resource — fetches on mount.
    let posts = LocalResource::new(move || {
        let config = config.clone();
        async move { api::fetch_posts(&config).await }
    });

    view! {
        <div class="posts-page">
            <h1>"Posts"</h1>
            <Suspense fallback=move || view! { <p class="posts-page__status">"Loading posts..."</p> }>
                {move || {
                    posts
                        .get()
                        .map(|fetched| match fetched {
                            Some(list) if !list.is_empty() => {
                                view! {
                                    <div class="posts-page__list">
                                        {list
                                            .into_iter()
                                            .map(|post| view! { <PostCard post=post/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Some(_) => view! { <p class="posts-page__status">"No posts yet."</p> }.into_any(),
                            None => {
                                view! {
                                    <p class="posts-page__status posts-page__status--error">
                                        "Couldn't load posts."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
