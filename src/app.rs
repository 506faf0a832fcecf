//! Root application component and the application route table.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::navbar::Navbar;
use crate::config::ApiConfig;
use crate::pages;
use crate::router::outlet::provide_router;
#[cfg(feature = "csr")]
use crate::router::{BrowserHistory, NavigationMode};
#[cfg(not(feature = "csr"))]
use crate::router::MemoryHistory;
use crate::router::{
    HistoryDriver, Lazy, PageModule, Route, Router, RouterConfig, RouterError, RouterOutlet,
};

pub const ROUTE_HOME: &str = "Home";
pub const ROUTE_POSTS: &str = "Posts";
pub const ROUTE_POST: &str = "Post";
pub const ROUTE_MAP: &str = "Map";

/// Build the application route table over `driver`.
///
/// # Errors
///
/// Propagates [`RouterError`] if the table is malformed.
pub fn app_router(driver: Rc<dyn HistoryDriver>) -> Result<Router<PageModule>, RouterError> {
    Router::new(
        RouterConfig::default(),
        driver,
        vec![
            Route::new(
                "/",
                ROUTE_HOME,
                Lazy::new(|| async { Ok(pages::home::module()) }),
            ),
            Route::new(
                "/posts",
                ROUTE_POSTS,
                Lazy::new(|| async { Ok(pages::posts::module()) }),
            ),
            Route::new(
                "/posts/:id",
                ROUTE_POST,
                Lazy::new(|| async { Ok(pages::post::module()) }),
            ),
            Route::new(
                "/map",
                ROUTE_MAP,
                Lazy::new(|| async { Ok(pages::map::module()) }),
            ),
        ],
    )
}

/// History driver for the platform this build runs on.
fn default_driver() -> Rc<dyn HistoryDriver> {
    #[cfg(feature = "csr")]
    {
        Rc::new(BrowserHistory::new(NavigationMode::History))
    }
    #[cfg(not(feature = "csr"))]
    {
        Rc::new(MemoryHistory::new("/"))
    }
}

/// Root application component.
///
/// Owns the configuration and router contexts; everything below renders
/// through the [`RouterOutlet`]. The route table is static, so a malformed
/// table is a bootstrap bug and fails fast.
#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    let router = app_router(default_driver()).expect("application route table is valid");
    provide_router(Rc::new(router));

    view! {
        <Title text="Waypost"/>
        <div class="app-shell">
            <Navbar/>
            <main class="app-shell__content">
                <RouterOutlet/>
            </main>
        </div>
    }
}
