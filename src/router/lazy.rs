//! Deferred, memoized view-module resolution.
//!
//! DESIGN
//! ======
//! Each route's view sits behind a [`Lazy`] cell. The loader runs the first
//! time the route is activated; a successful result is cached for the
//! lifetime of the application and never re-evaluated. Overlapping
//! activations share a single in-flight load. A failed load leaves the cell
//! retryable, so the next activation of that route runs the loader again.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};

/// Error produced by a view-module loader.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("failed to load view module: {0}")]
pub struct LoadError(pub String);

/// Observable resolution stage of a lazy cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStage {
    Unresolved,
    Loading,
    Resolved,
    Failed,
}

type SharedLoad<T> = Shared<LocalBoxFuture<'static, Result<T, LoadError>>>;

enum Slot<T: Clone> {
    Unresolved,
    Loading(SharedLoad<T>),
    Resolved(T),
    Failed(LoadError),
}

/// A lazily-evaluated, memoized view module.
pub struct Lazy<T: Clone + 'static> {
    loader: Rc<dyn Fn() -> LocalBoxFuture<'static, Result<T, LoadError>>>,
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T: Clone + 'static> Clone for Lazy<T> {
    fn clone(&self) -> Self {
        Self {
            loader: Rc::clone(&self.loader),
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: Clone + 'static> Lazy<T> {
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, LoadError>> + 'static,
    {
        Self {
            loader: Rc::new(move || loader().boxed_local()),
            slot: Rc::new(RefCell::new(Slot::Unresolved)),
        }
    }

    pub fn stage(&self) -> LoadStage {
        match &*self.slot.borrow() {
            Slot::Unresolved => LoadStage::Unresolved,
            Slot::Loading(_) => LoadStage::Loading,
            Slot::Resolved(_) => LoadStage::Resolved,
            Slot::Failed(_) => LoadStage::Failed,
        }
    }

    /// The cached module, if resolution already succeeded.
    pub fn get(&self) -> Option<T> {
        match &*self.slot.borrow() {
            Slot::Resolved(module) => Some(module.clone()),
            _ => None,
        }
    }

    /// Drive the cell to resolution.
    ///
    /// Runs the loader on first call, joins the in-flight load when one is
    /// already pending, and returns the cached module immediately once
    /// resolved.
    ///
    /// # Errors
    ///
    /// Propagates the loader's error; the cell stays retryable.
    pub async fn resolve(&self) -> Result<T, LoadError> {
        let load = {
            let mut slot = self.slot.borrow_mut();
            match &*slot {
                Slot::Resolved(module) => return Ok(module.clone()),
                Slot::Loading(load) => load.clone(),
                Slot::Unresolved | Slot::Failed(_) => {
                    let load = (self.loader)().shared();
                    *slot = Slot::Loading(load.clone());
                    load
                }
            }
        };

        let result = load.clone().await;

        // First completer commits; the ptr_eq guard keeps a stale completion
        // from clobbering a newer load started after a failure.
        let mut slot = self.slot.borrow_mut();
        if let Slot::Loading(current) = &*slot {
            if current.ptr_eq(&load) {
                *slot = match &result {
                    Ok(module) => Slot::Resolved(module.clone()),
                    Err(err) => Slot::Failed(err.clone()),
                };
            }
        }
        result
    }
}
