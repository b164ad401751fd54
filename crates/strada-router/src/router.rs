//! Per-method route tables with first-match dispatch.

use tracing::{debug, trace};

use crate::error::{Result, RouterError};
use crate::method::Method;
use crate::route::{Route, RouteMatch};

/// Ordered per-method route tables plus an optional fallback route.
///
/// Routes are scanned in registration order; the first match wins. The router
/// is meant to be populated during single-threaded startup and treated as
/// immutable afterwards: [`Router::find`] is a read-only scan that is safe to
/// call from many threads at once, while registration mutates the tables and
/// needs external synchronization if it must ever overlap with matching.
pub struct Router<T> {
    /// Tables in method-registration order, each in route-registration order.
    tables: Vec<(Method, Vec<Route<T>>)>,
    /// Route serving anything nothing else matched.
    fallback: Option<Route<T>>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Router<T> {
    /// Creates a new empty router.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tables: Vec::new(),
            fallback: None,
        }
    }

    /// Compiles a pattern and registers the route under `method`.
    ///
    /// # Errors
    ///
    /// Returns a pattern-compilation error ([`RouterError::InvalidPattern`],
    /// [`RouterError::DuplicateParameter`]) or
    /// [`RouterError::DuplicateRoute`] when a route registered for the same
    /// method already covers this pattern. Nothing is committed on failure.
    pub fn add(&mut self, method: Method, pattern: &str, handler: T) -> Result<()> {
        let route = Route::new(pattern, handler)?;
        self.insert(method, route)
    }

    /// Registers a route whose pattern is derived from the handler's declared
    /// name (`index` maps to `/`, `hello_world` to `/hello-world`).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Router::add`].
    pub fn add_from_name(&mut self, method: Method, handler_name: &str, handler: T) -> Result<()> {
        let route = Route::from_handler_name(handler_name, handler)?;
        self.insert(method, route)
    }

    /// Registers a pre-built route under `method`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::DuplicateRoute`] when a route registered for
    /// the same method already covers this pattern.
    pub fn insert(&mut self, method: Method, route: Route<T>) -> Result<()> {
        if let Some(existing) = self
            .routes_for(method)
            .iter()
            .find(|r| r.matches(route.pattern()).is_some())
        {
            return Err(RouterError::DuplicateRoute {
                method,
                pattern: route.pattern().to_string(),
                existing: existing.label(),
            });
        }

        debug!(method = %method, pattern = route.pattern(), "registered route");
        self.table_mut(method).push(route);
        Ok(())
    }

    /// Registers a route under the wildcard method bucket, responding to any
    /// method.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Router::add`].
    pub fn add_any(&mut self, pattern: &str, handler: T) -> Result<()> {
        self.add(Method::Any, pattern, handler)
    }

    /// Registers a GET route.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Router::add`].
    pub fn add_get(&mut self, pattern: &str, handler: T) -> Result<()> {
        self.add(Method::Get, pattern, handler)
    }

    /// Registers a HEAD route.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Router::add`].
    pub fn add_head(&mut self, pattern: &str, handler: T) -> Result<()> {
        self.add(Method::Head, pattern, handler)
    }

    /// Registers a POST route.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Router::add`].
    pub fn add_post(&mut self, pattern: &str, handler: T) -> Result<()> {
        self.add(Method::Post, pattern, handler)
    }

    /// Registers a PUT route.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Router::add`].
    pub fn add_put(&mut self, pattern: &str, handler: T) -> Result<()> {
        self.add(Method::Put, pattern, handler)
    }

    /// Registers a DELETE route.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Router::add`].
    pub fn add_delete(&mut self, pattern: &str, handler: T) -> Result<()> {
        self.add(Method::Delete, pattern, handler)
    }

    /// Registers a CONNECT route.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Router::add`].
    pub fn add_connect(&mut self, pattern: &str, handler: T) -> Result<()> {
        self.add(Method::Connect, pattern, handler)
    }

    /// Registers an OPTIONS route.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Router::add`].
    pub fn add_options(&mut self, pattern: &str, handler: T) -> Result<()> {
        self.add(Method::Options, pattern, handler)
    }

    /// Registers a TRACE route.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Router::add`].
    pub fn add_trace(&mut self, pattern: &str, handler: T) -> Result<()> {
        self.add(Method::Trace, pattern, handler)
    }

    /// Registers a PATCH route.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Router::add`].
    pub fn add_patch(&mut self, pattern: &str, handler: T) -> Result<()> {
        self.add(Method::Patch, pattern, handler)
    }

    /// Configures the fallback handler, wrapped internally into a `*` route.
    ///
    /// The fallback serves any request nothing else matched, under any
    /// method. Setting it again replaces the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidFallback`] when the wrapping route
    /// cannot be built.
    pub fn set_fallback(&mut self, handler: T) -> Result<()> {
        let route = Route::new("*", handler)
            .map_err(|err| RouterError::InvalidFallback(err.to_string()))?;
        self.set_fallback_route(route);
        Ok(())
    }

    /// Installs a pre-built route as the fallback, replacing any previous
    /// one.
    pub fn set_fallback_route(&mut self, route: Route<T>) {
        debug!(pattern = route.pattern(), "configured fallback route");
        self.fallback = Some(route);
    }

    /// Returns the fallback route, if one is configured.
    #[must_use]
    pub fn fallback(&self) -> Option<&Route<T>> {
        self.fallback.as_ref()
    }

    /// Finds the handler for a request.
    ///
    /// Routes registered for `method` are scanned in registration order and
    /// the first match wins; routes in the wildcard method bucket are
    /// consulted next. When nothing matches, the fallback (with no captured
    /// parameters) is returned if configured, otherwise `None` — the caller
    /// treats that as "not found".
    #[must_use]
    pub fn find(&self, method: Method, path: &str) -> Option<RouteMatch<'_, T>> {
        if let Some(found) = self.scan(method, path) {
            return Some(found);
        }
        if method != Method::Any {
            if let Some(found) = self.scan(Method::Any, path) {
                return Some(found);
            }
        }
        self.fallback.as_ref().map(|route| {
            trace!(method = %method, path, "serving fallback route");
            route.fallback_match()
        })
    }

    /// Returns the routes registered for `method`, in registration order.
    #[must_use]
    pub fn routes_for(&self, method: Method) -> &[Route<T>] {
        self.tables
            .iter()
            .find(|(m, _)| *m == method)
            .map_or(&[], |(_, routes)| routes.as_slice())
    }

    /// Iterates over every registered route, in method-registration order and
    /// within each method in route-registration order, with the fallback
    /// last. Restartable and never used for matching.
    pub fn iter(&self) -> impl Iterator<Item = &Route<T>> {
        self.tables
            .iter()
            .flat_map(|(_, routes)| routes.iter())
            .chain(self.fallback.iter())
    }

    /// Like [`Router::iter`], but pairs each route with the method bucket it
    /// was registered under. The fallback is reported under [`Method::Any`].
    pub fn entries(&self) -> impl Iterator<Item = (Method, &Route<T>)> {
        self.tables
            .iter()
            .flat_map(|(method, routes)| routes.iter().map(move |route| (*method, route)))
            .chain(self.fallback.iter().map(|route| (Method::Any, route)))
    }

    /// Returns the total number of routes, fallback included.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.iter().count()
    }

    /// Returns true if no route (and no fallback) is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(|(_, routes)| routes.is_empty()) && self.fallback.is_none()
    }

    fn scan(&self, method: Method, path: &str) -> Option<RouteMatch<'_, T>> {
        self.routes_for(method)
            .iter()
            .find_map(|route| route.matches(path))
    }

    fn table_mut(&mut self, method: Method) -> &mut Vec<Route<T>> {
        let pos = if let Some(pos) = self.tables.iter().position(|(m, _)| *m == method) {
            pos
        } else {
            self.tables.push((method, Vec::new()));
            self.tables.len() - 1
        };
        &mut self.tables[pos].1
    }
}
