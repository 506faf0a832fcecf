//! Landing page.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::nav_link::NavLink;
use crate::router::PageModule;

pub fn module() -> PageModule {
    Rc::new(|_params| view! { <HomePage/> }.into_any())
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Waypost"</h1>
            <p class="home-page__tagline">"Field notes and routes from the road."</p>
            <NavLink href="/posts".to_owned() class="btn btn--primary">
                "Read the posts"
            </NavLink>
        </div>
    }
}
