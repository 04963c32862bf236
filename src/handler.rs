//! Request dispatch
//!
//! Connects the registry to whatever renders pages. A request URL is
//! resolved once; a hit hands the route's page and merged query to the
//! renderer, a miss hands the untouched parsed URL to a fallback so static
//! files and other handlers still get a chance.

use crate::params::Params;
use crate::parsed_url::ParsedUrl;
use crate::registry::{MatchResult, Routes};
use crate::route::Route;
use crate::trace_log;
use std::sync::Arc;

/// Outcome of resolving a request URL
#[derive(Debug, Clone)]
pub enum Dispatch<'r> {
    /// A route matched; render its page with the query
    Render { route: &'r Route, query: Params },
    /// Nothing matched; let another handler serve the URL
    Fallback { parsed_url: ParsedUrl },
}

impl<'r> Dispatch<'r> {
    /// Page to render, if a route matched
    pub fn page(&self) -> Option<&'r str> {
        match *self {
            Dispatch::Render { route, .. } => Some(route.page()),
            Dispatch::Fallback { .. } => None,
        }
    }

    /// Check if this request falls through to the fallback handler
    pub fn is_fallback(&self) -> bool {
        matches!(self, Dispatch::Fallback { .. })
    }
}

impl Routes {
    /// Resolve a request URL into a render or fallback decision
    ///
    /// # Example
    ///
    /// ```
    /// use locale_routes::{Dispatch, Routes, RoutesConfig};
    ///
    /// let mut routes = Routes::new(RoutesConfig::new());
    /// routes.add(("post", "/post/:slug", "blog/post")).unwrap();
    ///
    /// match routes.dispatch("/post/hello") {
    ///     Dispatch::Render { route, query } => {
    ///         assert_eq!(route.page(), "/blog/post");
    ///         assert_eq!(query.get_str("slug"), Some("hello"));
    ///     }
    ///     Dispatch::Fallback { .. } => unreachable!(),
    /// }
    /// assert!(routes.dispatch("/favicon.ico").is_fallback());
    /// ```
    pub fn dispatch(&self, url: &str) -> Dispatch<'_> {
        let MatchResult {
            route,
            query,
            parsed_url,
            ..
        } = self.match_url(url);

        match route {
            Some(route) => Dispatch::Render { route, query },
            None => Dispatch::Fallback { parsed_url },
        }
    }

    /// Build a request handling closure borrowing this registry
    ///
    /// Use [`RequestHandler`] when the handler has to outlive the borrow.
    pub fn request_handler<'r, T, R, F>(&'r self, render: R, fallback: F) -> impl Fn(&str) -> T + 'r
    where
        R: Fn(&Route, &Params) -> T + 'r,
        F: Fn(&ParsedUrl) -> T + 'r,
    {
        move |url: &str| match self.dispatch(url) {
            Dispatch::Render { route, query } => render(route, &query),
            Dispatch::Fallback { parsed_url } => fallback(&parsed_url),
        }
    }
}

/// Handler invoked with the matched route and merged query
pub type RenderHandler<T> = Arc<dyn Fn(&Route, &Params) -> T + Send + Sync>;

/// Handler invoked with the parsed URL when no route matched
pub type FallbackHandler<T> = Arc<dyn Fn(&ParsedUrl) -> T + Send + Sync>;

/// Request handler bound to a finished registry
///
/// Cheap to clone and safe to share between request threads.
///
/// # Example
///
/// ```
/// use locale_routes::{RequestHandler, Routes, RoutesConfig};
/// use std::sync::Arc;
///
/// let mut routes = Routes::new(RoutesConfig::new().locales(["en", "fr"]));
/// routes.add("about").unwrap();
///
/// let handler = RequestHandler::new(
///     Arc::new(routes),
///     |route, query| format!("render {} ({})", route.page(), query.get_str("lang").unwrap_or("")),
///     |url| format!("static {}", url.pathname),
/// );
///
/// assert_eq!(handler.handle("/fr/about"), "render /about (fr)");
/// assert_eq!(handler.handle("/logo.png"), "static /logo.png");
/// ```
pub struct RequestHandler<T> {
    routes: Arc<Routes>,
    render: RenderHandler<T>,
    fallback: FallbackHandler<T>,
}

impl<T> Clone for RequestHandler<T> {
    fn clone(&self) -> Self {
        Self {
            routes: Arc::clone(&self.routes),
            render: Arc::clone(&self.render),
            fallback: Arc::clone(&self.fallback),
        }
    }
}

impl<T> RequestHandler<T> {
    /// Create a handler from a render and a fallback callback
    pub fn new<R, F>(routes: Arc<Routes>, render: R, fallback: F) -> Self
    where
        R: Fn(&Route, &Params) -> T + Send + Sync + 'static,
        F: Fn(&ParsedUrl) -> T + Send + Sync + 'static,
    {
        Self {
            routes,
            render: Arc::new(render),
            fallback: Arc::new(fallback),
        }
    }

    /// Registry this handler resolves against
    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    /// Handle a single request URL
    pub fn handle(&self, url: &str) -> T {
        match self.routes.dispatch(url) {
            Dispatch::Render { route, query } => {
                trace_log!("Rendering page '{}' for '{}'", route.page(), url);
                (self.render)(route, &query)
            }
            Dispatch::Fallback { parsed_url } => {
                trace_log!("Falling back for '{}'", url);
                (self.fallback)(&parsed_url)
            }
        }
    }
}

impl<T> std::fmt::Debug for RequestHandler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestHandler")
            .field("routes", &self.routes.len())
            .finish_non_exhaustive()
    }
}
