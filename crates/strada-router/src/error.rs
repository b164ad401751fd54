//! Error types for route construction and registration.

use crate::method::Method;

/// Errors that can occur while building routes or populating a router.
///
/// Matching itself never fails: a path that no route accepts is reported as
/// `None` by the lookup functions, not as an error.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// The pattern text cannot be compiled into a matcher.
    ///
    /// This covers malformed captures and the more-than-one-wildcard rule.
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The offending pattern, as supplied by the caller.
        pattern: String,
        /// Why compilation failed.
        reason: String,
    },

    /// The same capture name appears more than once in a single pattern.
    #[error("pattern `{pattern}` declares parameter `{name}` more than once")]
    DuplicateParameter {
        /// The offending pattern.
        pattern: String,
        /// The repeated capture name.
        name: String,
    },

    /// A new route collides with one already registered for the same method.
    ///
    /// Two patterns collide when the existing route would accept the new
    /// route's normalized pattern text as a request path, so `/Home`,
    /// `/home/` and `/home` are all the same route.
    #[error("route `{pattern}` is already registered for {method} (handled by `{existing}`)")]
    DuplicateRoute {
        /// Method the registration was attempted for.
        method: Method,
        /// Normalized pattern of the rejected route.
        pattern: String,
        /// Name or display pattern of the route already owning the path.
        existing: String,
    },

    /// The fallback route could not be configured.
    #[error("invalid fallback: {0}")]
    InvalidFallback(String),
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
