//! In-app link routed through the navigator instead of a full page load.

use leptos::prelude::*;

use crate::router::Navigator;

#[component]
pub fn NavLink(
    href: String,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let navigator = expect_context::<Navigator>();
    let target = href.clone();
    view! {
        <a
            href=href
            class=class
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                navigator.to(&target);
            }
        >
            {children()}
        </a>
    }
}
