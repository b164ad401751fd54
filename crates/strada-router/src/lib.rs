//! # strada-router
//!
//! A request-routing engine: given a method and a path, it selects the
//! registered handler that should process the request and extracts any path
//! parameters along the way.
//!
//! This crate provides:
//! - Pattern compilation with named parameters and wildcard tails
//! - Per-method route tables with first-match-in-registration-order dispatch
//! - Case-insensitive matching with single-trailing-slash tolerance
//! - Duplicate-route detection at registration time
//! - A fallback route for anything nothing else matched
//! - Brace-notation pattern rendering for documentation tooling
//!
//! Handlers are opaque: the router stores values of any type `T` and returns
//! references to them, but never invokes or inspects them. Transport, handler
//! execution and response serialization live outside this crate.
//!
//! ## Quick Start
//!
//! ```
//! use strada_router::{Method, Router};
//!
//! let mut router = Router::new();
//! router.add_get("/", "home").unwrap();
//! router.add_get("/cats/:cat_id", "cat_detail").unwrap();
//!
//! let found = router.find(Method::Get, "/cats/19").unwrap();
//! assert_eq!(*found.handler(), "cat_detail");
//! assert_eq!(found.get("cat_id"), Some("19"));
//!
//! assert!(router.find(Method::Get, "/dogs").is_none());
//! ```
//!
//! ## Path Parameters
//!
//! Patterns capture one path segment per `:name` or `{name}` placeholder and
//! the remainder of the path per `*` (under the name `tail`):
//!
//! ```
//! use strada_router::{Method, Router};
//!
//! let mut router = Router::new();
//! router.add_get("/posts/{post_id}/comments/{comment_id}", ()).unwrap();
//! router.add_get("/static/*", ()).unwrap();
//!
//! let found = router.find(Method::Get, "/posts/42/comments/7").unwrap();
//! assert_eq!(found.get("post_id"), Some("42"));
//!
//! let found = router.find(Method::Get, "/static/css/site.css").unwrap();
//! assert_eq!(found.get("tail"), Some("css/site.css"));
//! ```
//!
//! ## Fallback
//!
//! ```
//! use strada_router::{Method, Router};
//!
//! let mut router = Router::new();
//! router.add_get("/", "home").unwrap();
//! router.set_fallback("not_found").unwrap();
//!
//! let found = router.find(Method::Post, "/nope").unwrap();
//! assert_eq!(*found.handler(), "not_found");
//! assert!(found.values().is_none());
//! ```
//!
//! ## Registration lifecycle
//!
//! Populate the router during single-threaded startup, then treat it as
//! immutable: [`Router::find`] is a side-effect-free scan and safe to call
//! concurrently, while registration is not. Systems that must mutate routes
//! after startup need their own synchronization around the whole router.

mod error;
mod introspect;
mod method;
mod params;
mod pattern;
mod route;
mod router;

pub use error::{Result, RouterError};
pub use introspect::{paths_document, route_listings, RouteListing};
pub use method::Method;
pub use params::PathParams;
pub use pattern::{pattern_from_name, PathPattern, TAIL_PARAM};
pub use route::{Route, RouteMatch};
pub use router::Router;
