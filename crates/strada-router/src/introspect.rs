//! Route introspection for documentation tooling.
//!
//! These helpers walk a populated [`Router`] and render its routes in brace
//! notation, the form documentation generators (OpenAPI in particular)
//! expect. They are read-only and never used for matching.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::method::Method;
use crate::router::Router;

/// One registered route, as seen by documentation tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteListing {
    /// Method bucket the route was registered under (`*` for any-method
    /// routes and the fallback).
    pub method: String,
    /// Pattern in brace notation.
    pub pattern: String,
}

/// Lists every registered route in registration order, fallback last.
#[must_use]
pub fn route_listings<T>(router: &Router<T>) -> Vec<RouteListing> {
    router
        .entries()
        .map(|(method, route)| RouteListing {
            method: method.to_string(),
            pattern: route.display_pattern(),
        })
        .collect()
}

/// Builds a minimal paths document: each display pattern mapped to the
/// methods that serve it, methods listed in registration order.
#[must_use]
pub fn paths_document<T>(router: &Router<T>) -> Value {
    let mut paths = Map::new();

    for (method, route) in router.entries() {
        let entry = paths
            .entry(route.display_pattern())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(methods) = entry {
            methods.push(Value::String(method.to_string()));
        }
    }

    json!({ "paths": paths })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() {}

    #[test]
    fn test_route_listings_use_brace_notation() {
        let mut router = Router::new();
        router.add_get("/api/cats/:cat_id", handler).unwrap();
        router.add_post("/api/cats", handler).unwrap();
        router.set_fallback(handler).unwrap();

        let listings = route_listings(&router);
        assert_eq!(
            listings,
            vec![
                RouteListing {
                    method: "GET".to_string(),
                    pattern: "/api/cats/{cat_id}".to_string(),
                },
                RouteListing {
                    method: "POST".to_string(),
                    pattern: "/api/cats".to_string(),
                },
                RouteListing {
                    method: "*".to_string(),
                    pattern: "*".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_paths_document_groups_methods() {
        let mut router = Router::new();
        router.add_get("/cats/:id", handler).unwrap();
        router.add_delete("/cats/:id", handler).unwrap();

        let doc = paths_document(&router);
        assert_eq!(
            doc["paths"]["/cats/{id}"],
            serde_json::json!(["GET", "DELETE"])
        );
    }

    #[test]
    fn test_listing_serializes() {
        let listing = RouteListing {
            method: "GET".to_string(),
            pattern: "/cats/{id}".to_string(),
        };
        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["method"], "GET");
        assert_eq!(value["pattern"], "/cats/{id}");
    }
}
