//! Client-side router: an ordered route table over lazily-loaded views.
//!
//! DESIGN
//! ======
//! The route table is built once at startup and is immutable afterwards.
//! Path patterns are matched in table order, first match wins. Activating a
//! route drives its [`Lazy`] view cell to resolution; each activation bumps
//! an epoch, and a resolution that finishes after a newer navigation has
//! started is dropped instead of committed (the loaded module stays
//! cached). Names are unique and double as targets for programmatic
//! navigation via [`Router::path_for`].


pub mod history;
pub mod lazy;
pub mod matcher;
pub mod outlet;
pub mod route;

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

#[cfg(feature = "csr")]
pub use history::BrowserHistory;
pub use history::{HistoryDriver, MemoryHistory, NavigationMode};
pub use lazy::{Lazy, LoadError, LoadStage};
pub use matcher::RouteParams;
pub use outlet::{Navigator, PageModule, RouterOutlet};
pub use route::Route;

/// Router construction failure.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("duplicate route name `{0}`")]
    DuplicateName(&'static str),
}

/// Navigation mode and base path for a router instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterConfig {
    pub mode: NavigationMode,
    pub base: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            mode: NavigationMode::History,
            base: "/".to_owned(),
        }
    }
}

/// The committed navigation state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activation {
    pub name: &'static str,
    pub params: RouteParams,
}

/// Result of driving one navigation to completion.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The matched route's view resolved and is now current.
    Activated {
        name: &'static str,
        params: RouteParams,
        view: T,
    },
    /// No table entry matched the path.
    NotFound { path: String },
    /// The matched route's loader failed; the previous activation stands.
    Failed {
        name: &'static str,
        error: LoadError,
    },
    /// A newer navigation started while this one was resolving.
    Superseded,
}

struct NavCell {
    epoch: u64,
    current: Option<Activation>,
}

/// A singleton router over an ordered route table.
pub struct Router<T: Clone + 'static> {
    config: RouterConfig,
    driver: Rc<dyn HistoryDriver>,
    routes: Vec<Route<T>>,
    state: Rc<RefCell<NavCell>>,
}

impl<T: Clone + 'static> std::fmt::Debug for Router<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("config", &self.config)
            .field("routes", &self.routes.len())
            .finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> Router<T> {
    /// Build a router over `routes`.
    ///
    /// # Errors
    ///
    /// Rejects a table containing two routes with the same name.
    pub fn new(
        config: RouterConfig,
        driver: Rc<dyn HistoryDriver>,
        routes: Vec<Route<T>>,
    ) -> Result<Self, RouterError> {
        for (i, route) in routes.iter().enumerate() {
            if routes[..i].iter().any(|r| r.name() == route.name()) {
                return Err(RouterError::DuplicateName(route.name()));
            }
        }
        Ok(Self {
            config,
            driver,
            routes,
            state: Rc::new(RefCell::new(NavCell {
                epoch: 0,
                current: None,
            })),
        })
    }

    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    pub fn route(&self, name: &str) -> Option<&Route<T>> {
        self.routes.iter().find(|r| r.name() == name)
    }

    pub fn driver(&self) -> Rc<dyn HistoryDriver> {
        Rc::clone(&self.driver)
    }

    /// The committed activation, if any navigation has succeeded yet.
    pub fn current(&self) -> Option<Activation> {
        self.state.borrow().current.clone()
    }

    /// Match `path` against the table in order; first match wins.
    pub fn recognize(&self, path: &str) -> Option<(&Route<T>, RouteParams)> {
        let path = self.strip_base(path)?;
        self.routes
            .iter()
            .find_map(|route| route.pattern().matches(&path).map(|params| (route, params)))
    }

    /// Build the concrete path for a named route, including the base path.
    pub fn path_for(&self, name: &str, params: &RouteParams) -> Option<String> {
        let filled = self.route(name)?.pattern().fill(params)?;
        let base = self.config.base.trim_end_matches('/');
        Some(format!("{base}{filled}"))
    }

    /// Push `path` onto the history and activate the matching route.
    pub async fn navigate(&self, path: &str) -> Outcome<T> {
        self.driver.push(path);
        self.activate(path).await
    }

    /// Replace the current history entry and activate the matching route.
    pub async fn replace(&self, path: &str) -> Outcome<T> {
        self.driver.replace(path);
        self.activate(path).await
    }

    /// Re-activate from the driver's current location (back/forward).
    pub async fn sync(&self) -> Outcome<T> {
        let path = self.driver.current_path();
        self.activate(&path).await
    }

    async fn activate(&self, path: &str) -> Outcome<T> {
        let epoch = {
            let mut cell = self.state.borrow_mut();
            cell.epoch += 1;
            cell.epoch
        };

        let Some((route, params)) = self.recognize(path) else {
            debug!("no route matches {path}");
            self.state.borrow_mut().current = None;
            return Outcome::NotFound {
                path: path.to_owned(),
            };
        };
        let name = route.name();
        debug!("activating route {name} for {path}");

        let resolved = route.view().resolve().await;

        let mut cell = self.state.borrow_mut();
        if cell.epoch != epoch {
            debug!("dropping stale activation of {name}");
            return Outcome::Superseded;
        }
        match resolved {
            Ok(view) => {
                cell.current = Some(Activation {
                    name,
                    params: params.clone(),
                });
                Outcome::Activated { name, params, view }
            }
            Err(error) => Outcome::Failed { name, error },
        }
    }

    fn strip_base(&self, path: &str) -> Option<String> {
        let base = self.config.base.trim_end_matches('/');
        if base.is_empty() {
            return Some(path.to_owned());
        }
        let rest = path.strip_prefix(base)?;
        if rest.is_empty() {
            Some("/".to_owned())
        } else if rest.starts_with('/') {
            Some(rest.to_owned())
        } else {
            None
        }
    }
}
