//! Leptos bridge: reactive rendering of the committed route.
//!
//! `provide_router` installs a [`Navigator`] into the reactive tree; links
//! and pages navigate through it, and [`RouterOutlet`] renders whatever the
//! router last committed (loading, page, not-found, or load-error state).
//! The router itself is `Rc`-based, so the navigator carries it in
//! local-storage arena handles and stays `Copy` + context-safe.

use std::rc::Rc;

use leptos::prelude::*;

use super::matcher::RouteParams;
use super::{Outcome, Router};

/// A resolved view module: builds the page view from bound parameters.
pub type PageModule = Rc<dyn Fn(&RouteParams) -> AnyView>;

/// Rendering phase of the outlet.
#[derive(Clone)]
enum Phase {
    Loading,
    Ready {
        module: PageModule,
        params: RouteParams,
    },
    NotFound {
        path: String,
    },
    Failed {
        message: String,
    },
}

enum NavRequest {
    Push(String),
    Sync,
}

/// Handle for programmatic navigation, provided by context.
#[derive(Clone, Copy)]
pub struct Navigator {
    router: StoredValue<Rc<Router<PageModule>>, LocalStorage>,
    phase: RwSignal<Phase, LocalStorage>,
}

impl Navigator {
    /// Navigate to a concrete path, pushing a history entry.
    pub fn to(&self, path: &str) {
        self.dispatch(NavRequest::Push(path.to_owned()));
    }

    /// Build the path for a named route; see [`Router::path_for`].
    pub fn path_for(&self, name: &str, params: &RouteParams) -> Option<String> {
        self.router.with_value(|router| router.path_for(name, params))
    }

    /// Re-activate from the current location (initial load, back/forward).
    fn sync(&self) {
        self.dispatch(NavRequest::Sync);
    }

    fn dispatch(&self, request: NavRequest) {
        let router = self.router.with_value(Rc::clone);
        let phase = self.phase;
        phase.set(Phase::Loading);
        let navigation = async move {
            let outcome = match request {
                NavRequest::Push(path) => router.navigate(&path).await,
                NavRequest::Sync => router.sync().await,
            };
            match outcome {
                Outcome::Activated { params, view, .. } => phase.set(Phase::Ready {
                    module: view,
                    params,
                }),
                Outcome::NotFound { path } => phase.set(Phase::NotFound { path }),
                Outcome::Failed { name, error } => phase.set(Phase::Failed {
                    message: format!("couldn't load {name}: {error}"),
                }),
                Outcome::Superseded => {}
            }
        };

        #[cfg(feature = "csr")]
        wasm_bindgen_futures::spawn_local(navigation);
        #[cfg(not(feature = "csr"))]
        let _ = navigation;
    }
}

/// Install `router` into the reactive tree and trigger the initial
/// activation. Returns the navigator it provides by context.
pub fn provide_router(router: Rc<Router<PageModule>>) -> Navigator {
    let navigator = Navigator {
        router: StoredValue::new_local(router.clone()),
        phase: RwSignal::new_local(Phase::Loading),
    };
    provide_context(navigator);

    navigator.sync();
    router.driver().subscribe(Box::new(move || navigator.sync()));
    navigator
}

/// Renders the committed route's view.
#[component]
pub fn RouterOutlet() -> impl IntoView {
    let phase = expect_context::<Navigator>().phase;
    view! {
        <section class="outlet">
            {move || match phase.get() {
                Phase::Loading => {
                    view! { <p class="outlet__status">"Loading…"</p> }.into_any()
                }
                Phase::Ready { module, params } => module(&params),
                Phase::NotFound { path } => {
                    view! {
                        <p class="outlet__status outlet__status--error">
                            {format!("No page at {path}")}
                        </p>
                    }
                        .into_any()
                }
                Phase::Failed { message } => {
                    view! { <p class="outlet__status outlet__status--error">{message}</p> }
                        .into_any()
                }
            }}
        </section>
    }
}
