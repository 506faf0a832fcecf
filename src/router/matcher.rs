//! Path patterns and parameter binding.
//!
//! A pattern is a `/`-separated list of segments; a segment starting with
//! `:` binds the corresponding path segment by name. Matching is exact on
//! segment count, so `/posts/:id` matches `/posts/42` but not `/posts` or
//! `/posts/42/edit`.

#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;

use std::collections::BTreeMap;

/// Parameter bindings produced by a successful match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_owned(), value.to_owned());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for RouteParams {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut params = Self::default();
        for (name, value) in pairs {
            params.insert(name, value);
        }
        params
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed URL path pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        let segments = split(pattern)
            .map(|seg| match seg.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_owned()),
                None => Segment::Static(seg.to_owned()),
            })
            .collect();
        Self {
            raw: pattern.to_owned(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a concrete path, yielding parameter bindings on success.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let path = normalize(path);
        let segments: Vec<&str> = split(&path).collect();
        if segments.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::default();
        for (pattern, actual) in self.segments.iter().zip(segments) {
            match pattern {
                Segment::Static(expected) if expected == actual => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => params.insert(name, actual),
            }
        }
        Some(params)
    }

    /// Build a concrete path from parameter bindings.
    ///
    /// Returns `None` if a named segment has no binding.
    pub fn fill(&self, params: &RouteParams) -> Option<String> {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Static(text) => out.push_str(text),
                Segment::Param(name) => out.push_str(params.get(name)?),
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        Some(out)
    }
}

/// Strip query/fragment suffixes and collapse a trailing slash.
pub fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|seg| !seg.is_empty())
}
