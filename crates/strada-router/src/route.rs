//! A single route: one compiled pattern bound to one handler.

use crate::error::Result;
use crate::params::PathParams;
use crate::pattern::{pattern_from_name, PathPattern};

/// One compiled pattern bound to one handler.
///
/// The handler is an opaque value: the route stores it and hands out
/// references to it, but never invokes or inspects it. Routes are immutable
/// after construction.
#[derive(Debug, Clone)]
pub struct Route<T> {
    /// Compiled pattern.
    pattern: PathPattern,
    /// Opaque handler reference.
    handler: T,
    /// Optional name, used in diagnostics and duplicate-route errors.
    name: Option<String>,
}

impl<T> Route<T> {
    /// Compiles a pattern and binds it to a handler.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RouterError::InvalidPattern`] or
    /// [`crate::RouterError::DuplicateParameter`] when the pattern cannot be
    /// compiled.
    pub fn new(pattern: &str, handler: T) -> Result<Self> {
        Ok(Self {
            pattern: PathPattern::new(pattern)?,
            handler,
            name: None,
        })
    }

    /// Builds a route whose pattern is derived from the handler's declared
    /// name: `index` maps to `/`, any other name to `/` plus the name with
    /// underscores replaced by hyphens.
    ///
    /// The name is attached to the route for diagnostics.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Route::new`].
    pub fn from_handler_name(name: &str, handler: T) -> Result<Self> {
        let pattern = pattern_from_name(name);
        Ok(Self::new(&pattern, handler)?.with_name(name))
    }

    /// Attaches a name to the route.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Tests a candidate path against this route.
    ///
    /// Parameterless routes first try an exact case-insensitive comparison
    /// with the normalized pattern, then fall through to the compiled matcher
    /// (which also accepts one extra trailing `/`). The returned match carries
    /// captured values only when the pattern declares parameters.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<RouteMatch<'_, T>> {
        if !self.pattern.has_params() && path.eq_ignore_ascii_case(self.pattern.pattern()) {
            return Some(RouteMatch {
                handler: &self.handler,
                values: None,
            });
        }

        let params = self.pattern.match_path(path)?;
        let values = if self.pattern.has_params() {
            Some(params)
        } else {
            None
        };

        Some(RouteMatch {
            handler: &self.handler,
            values,
        })
    }

    /// Returns the normalized pattern text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.pattern()
    }

    /// Renders the pattern with parameters in brace notation.
    #[must_use]
    pub fn display_pattern(&self) -> String {
        self.pattern.display_pattern()
    }

    /// Returns the capture names in left-to-right order.
    #[must_use]
    pub fn param_names(&self) -> &[String] {
        self.pattern.param_names()
    }

    /// Returns true if the pattern captures anything.
    #[must_use]
    pub fn has_params(&self) -> bool {
        self.pattern.has_params()
    }

    /// Returns the handler bound to this route.
    #[must_use]
    pub fn handler(&self) -> &T {
        &self.handler
    }

    /// Returns the route's name, if one was attached.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// How this route is referred to in diagnostics.
    pub(crate) fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.display_pattern())
    }

    /// A match bound to this route's handler with no captured values, as
    /// produced when the route serves as the router's fallback.
    pub(crate) const fn fallback_match(&self) -> RouteMatch<'_, T> {
        RouteMatch {
            handler: &self.handler,
            values: None,
        }
    }
}

/// The result of a successful match.
///
/// Carries a reference to the matched route's handler and, when the route's
/// pattern declares parameters, the captured name/value pairs. Parameterless
/// routes always yield `values() == None`.
#[derive(Debug)]
pub struct RouteMatch<'r, T> {
    handler: &'r T,
    values: Option<PathParams>,
}

impl<'r, T> RouteMatch<'r, T> {
    /// Returns the matched handler.
    #[must_use]
    pub const fn handler(&self) -> &'r T {
        self.handler
    }

    /// Returns the captured parameters, if the pattern declares any.
    #[must_use]
    pub const fn values(&self) -> Option<&PathParams> {
        self.values.as_ref()
    }

    /// Looks up a captured value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.as_ref()?.get(name)
    }

    /// Consumes the match, returning the handler and captured parameters.
    #[must_use]
    pub fn into_parts(self) -> (&'r T, Option<PathParams>) {
        (self.handler, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() {}

    #[test]
    fn test_parameterless_match_has_no_values() {
        let route = Route::new("/alive", noop).unwrap();
        let m = route.matches("/alive").unwrap();
        assert!(m.values().is_none());

        // Trailing-slash tolerance goes through the compiled matcher.
        let m = route.matches("/alive/").unwrap();
        assert!(m.values().is_none());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let route = Route::new("/foo/:id", noop).unwrap();
        let m = route.matches("/Foo/123").unwrap();
        assert_eq!(m.get("id"), Some("123"));
    }

    #[test]
    fn test_handler_can_be_any_value() {
        struct Bundle {
            request_handler: fn() -> u32,
            auth_handler: fn() -> u32,
        }
        fn request() -> u32 {
            1
        }
        fn auth() -> u32 {
            2
        }

        let route = Route::new(
            "/",
            Bundle {
                request_handler: request,
                auth_handler: auth,
            },
        )
        .unwrap();

        let m = route.matches("/").unwrap();
        assert_eq!((m.handler().request_handler)(), 1);
        assert_eq!((m.handler().auth_handler)(), 2);
    }

    #[test]
    fn test_derived_route_carries_name() {
        let route = Route::from_handler_name("hello_world", noop).unwrap();
        assert_eq!(route.pattern(), "/hello-world");
        assert_eq!(route.name(), Some("hello_world"));
        assert!(route.matches("/hello-world").is_some());
        assert!(route.matches("/hello_world").is_none());
    }

    #[test]
    fn test_into_parts() {
        let route = Route::new("/x/:id", 7u8).unwrap();
        let (handler, values) = route.matches("/x/9").unwrap().into_parts();
        assert_eq!(*handler, 7);
        assert_eq!(values.unwrap().get("id"), Some("9"));
    }
}
