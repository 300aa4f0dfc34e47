//! Minimal routing-table collaborator used to build endpoint paths.
//!
//! The resolver never assembles endpoint paths itself; it asks the host's
//! routing table, exactly like templates do. [`RouteMap`] is a small concrete
//! table mapping endpoint names to path patterns with `<name>` placeholders,
//! sufficient for hosts and for exercising the resolvers in tests.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::ResolveError;

/// Named parameters supplied when building a URL for an endpoint.
pub type Params = BTreeMap<String, String>;

/// Mapping of endpoint names to URL path patterns.
///
/// Patterns are root-relative and use angle-bracket placeholders, e.g.
/// `/static/<filename>`. Parameters that do not fill a placeholder are
/// rendered as a query string in sorted key order.
#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    routes: BTreeMap<String, String>,
}

impl RouteMap {
    /// Create an empty routing table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a path pattern for a named endpoint, replacing any previous
    /// registration.
    pub fn route(mut self, endpoint: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.routes.insert(endpoint.into(), pattern.into());
        self
    }

    /// Build the root-relative path for `endpoint` from the given parameters.
    ///
    /// Placeholder values are substituted verbatim; leftover parameters become
    /// query arguments. Unfilled placeholders and unregistered endpoints are
    /// errors.
    pub fn build(&self, endpoint: &str, params: &Params) -> Result<String, ResolveError> {
        let pattern = self
            .routes
            .get(endpoint)
            .ok_or_else(|| ResolveError::UnknownEndpoint {
                endpoint: endpoint.to_string(),
            })?;

        let mut path = String::with_capacity(pattern.len());
        let mut consumed = BTreeSet::new();
        let mut rest = pattern.as_str();
        while let Some(start) = rest.find('<') {
            path.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            // unterminated placeholders are copied through verbatim
            let Some(end) = after.find('>') else {
                path.push_str(&rest[start..]);
                rest = "";
                break;
            };
            let name = &after[..end];
            let value = params
                .get(name)
                .ok_or_else(|| ResolveError::MissingParameter {
                    endpoint: endpoint.to_string(),
                    name: name.to_string(),
                })?;
            path.push_str(value);
            consumed.insert(name.to_string());
            rest = &after[end + 1..];
        }
        path.push_str(rest);

        let query: Vec<String> = params
            .iter()
            .filter(|(key, _)| !consumed.contains(key.as_str()))
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        if !query.is_empty() {
            path.push('?');
            path.push_str(&query.join("&"));
        }

        Ok(path)
    }
}
