//! History drivers backing router navigation.
//!
//! The router talks to the browsing history through a small trait so the
//! running app can use the History API while tests drive navigation against
//! an in-memory stack.

use std::cell::RefCell;

/// How paths are written to and read from the location bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationMode {
    /// Real paths via the browsing history API.
    History,
    /// Paths carried in the URL fragment.
    Fragment,
}

pub trait HistoryDriver {
    /// Path of the current history entry, always starting with `/`.
    fn current_path(&self) -> String;

    /// Append a new history entry.
    fn push(&self, path: &str);

    /// Replace the current history entry.
    fn replace(&self, path: &str);

    /// Register a callback for navigation originating outside the router
    /// (back/forward buttons). Drivers without an external source ignore it.
    fn subscribe(&self, callback: Box<dyn Fn()>) {
        let _ = callback;
    }
}

/// In-memory driver used by tests and native builds.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: RefCell::new(vec![initial.to_owned()]),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl HistoryDriver for MemoryHistory {
    fn current_path(&self) -> String {
        self.entries
            .borrow()
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_owned())
    }

    fn push(&self, path: &str) {
        self.entries.borrow_mut().push(path.to_owned());
    }

    fn replace(&self, path: &str) {
        let mut entries = self.entries.borrow_mut();
        entries.pop();
        entries.push(path.to_owned());
    }
}

#[cfg(feature = "csr")]
pub use browser::BrowserHistory;

#[cfg(feature = "csr")]
mod browser {
    use super::{HistoryDriver, NavigationMode};

    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    /// Driver over `window.history` / `window.location`.
    pub struct BrowserHistory {
        mode: NavigationMode,
    }

    impl BrowserHistory {
        pub fn new(mode: NavigationMode) -> Self {
            Self { mode }
        }

        /// URL value handed to `pushState`/`replaceState` for a path.
        fn href_for(&self, path: &str) -> String {
            match self.mode {
                NavigationMode::History => path.to_owned(),
                NavigationMode::Fragment => format!("#{path}"),
            }
        }

        fn write(&self, path: &str, replace: bool) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Ok(history) = window.history() else {
                return;
            };
            let href = self.href_for(path);
            let _ = if replace {
                history.replace_state_with_url(&JsValue::NULL, "", Some(&href))
            } else {
                history.push_state_with_url(&JsValue::NULL, "", Some(&href))
            };
        }
    }

    impl HistoryDriver for BrowserHistory {
        fn current_path(&self) -> String {
            let Some(window) = web_sys::window() else {
                return "/".to_owned();
            };
            let location = window.location();
            match self.mode {
                NavigationMode::History => {
                    location.pathname().unwrap_or_else(|_| "/".to_owned())
                }
                NavigationMode::Fragment => {
                    let hash = location.hash().unwrap_or_default();
                    let path = hash.trim_start_matches('#');
                    if path.is_empty() {
                        "/".to_owned()
                    } else {
                        path.to_owned()
                    }
                }
            }
        }

        fn push(&self, path: &str) {
            self.write(path, false);
        }

        fn replace(&self, path: &str) {
            self.write(path, true);
        }

        fn subscribe(&self, callback: Box<dyn Fn()>) {
            // pushState never fires popstate, so router-initiated pushes do
            // not loop back through this listener.
            let closure = Closure::<dyn FnMut()>::new(move || callback());
            let event = match self.mode {
                NavigationMode::History => "popstate",
                NavigationMode::Fragment => "hashchange",
            };
            if let Some(window) = web_sys::window() {
                let _ = window.add_event_listener_with_callback(
                    event,
                    closure.as_ref().unchecked_ref::<js_sys::Function>(),
                );
            }
            closure.forget();
        }
    }
}
