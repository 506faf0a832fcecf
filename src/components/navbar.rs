//! Top navigation bar with links to the main routes.

use leptos::prelude::*;

use super::nav_link::NavLink;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <span class="navbar__brand">"Waypost"</span>
            <div class="navbar__links">
                <NavLink href="/".to_owned() class="navbar__link">"Home"</NavLink>
                <NavLink href="/posts".to_owned() class="navbar__link">"Posts"</NavLink>
                <NavLink href="/map".to_owned() class="navbar__link">"Map"</NavLink>
            </div>
        </nav>
    }
}
