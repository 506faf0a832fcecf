//! Route descriptors: one navigable application state each.

use super::lazy::Lazy;
use super::matcher::PathPattern;

/// A (path pattern, name, lazy view) triple.
#[derive(Clone)]
pub struct Route<T: Clone + 'static> {
    pattern: PathPattern,
    name: &'static str,
    view: Lazy<T>,
}

impl<T: Clone + 'static> Route<T> {
    pub fn new(path: &str, name: &'static str, view: Lazy<T>) -> Self {
        Self {
            pattern: PathPattern::parse(path),
            name,
            view,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn view(&self) -> &Lazy<T> {
        &self.view
    }
}
