//! Route registry
//!
//! [`Routes`] owns the ordered routing table. It injects the locale prefix
//! into every pattern at registration time, resolves incoming URLs with
//! first-match-wins semantics, and looks routes up by name to generate URLs.
//!
//! The registry has two phases: it is built with [`Routes::add`] (`&mut
//! self`) and then served through lookups that only need `&self`, so a
//! finished registry can be shared between threads as-is.

use crate::error::{RouteError, RouteResult};
use crate::params::Params;
use crate::parsed_url::ParsedUrl;
use crate::route::{Route, RouteDefinition, Urls};
use crate::{debug_log, error_log, info_log, trace_log};
use std::sync::atomic::{AtomicU64, Ordering};

/// Query key carrying the active locale
pub const LANG_KEY: &str = "lang";

static NEXT_TABLE_ID: AtomicU64 = AtomicU64::new(0);

fn next_table_id() -> u64 {
    NEXT_TABLE_ID.fetch_add(1, Ordering::Relaxed)
}

// ============================================================================
// RoutesConfig
// ============================================================================

/// Registry-wide settings
///
/// # Example
///
/// ```
/// use locale_routes::RoutesConfig;
///
/// let config = RoutesConfig::new()
///     .locales(["en", "fr", "de"])
///     .default_locale("en")
///     .prefix("/app");
///
/// assert_eq!(config.locales, ["en", "fr", "de"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoutesConfig {
    /// Every locale the site is served in
    pub locales: Vec<String>,
    /// Locale used when a URL carries none
    pub default_locale: String,
    /// Path inserted between the locale segment and each route's pattern
    pub prefix: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            locales: vec!["en".to_string()],
            default_locale: "en".to_string(),
            prefix: String::new(),
        }
    }
}

impl RoutesConfig {
    /// Create the default configuration (`en` only, no prefix)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locales
    pub fn locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales = locales.into_iter().map(Into::into).collect();
        self
    }

    /// Set the default locale
    pub fn default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Set the path prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

// ============================================================================
// Lookup results
// ============================================================================

/// Result of resolving a URL
#[derive(Debug, Clone)]
pub struct MatchResult<'r> {
    /// First route whose pattern accepted the path
    pub route: Option<&'r Route>,
    /// Captures extracted from the path
    pub params: Params,
    /// URL query merged with the captures, `lang` always present
    pub query: Params,
    /// The URL as received
    pub parsed_url: ParsedUrl,
}

impl<'r> MatchResult<'r> {
    /// Check if a route matched
    pub fn is_match(&self) -> bool {
        self.route.is_some()
    }

    /// Locale of the request
    pub fn language(&self) -> Option<&str> {
        self.query.get_str(LANG_KEY)
    }
}

/// Result of [`Routes::find_and_get_urls`]
#[derive(Debug, Clone)]
pub struct FoundUrls<'r> {
    pub route: Option<&'r Route>,
    pub urls: Urls,
    /// The input was a route name, so `params` were route parameters rather
    /// than part of a literal URL
    pub by_name: bool,
}

// ============================================================================
// Routes
// ============================================================================

/// Ordered, locale-aware routing table
///
/// # Example
///
/// ```
/// use locale_routes::{Params, Routes, RoutesConfig};
///
/// let mut routes = Routes::new(RoutesConfig::new().locales(["en", "fr"]));
/// routes
///     .add(("about", "/about", "about"))?
///     .add(("user", "/user/:id", "user"))?;
///
/// let matched = routes.match_url("/fr/user/42");
/// assert_eq!(matched.route.and_then(|r| r.name()), Some("user"));
/// assert_eq!(matched.query.get_str("id"), Some("42"));
/// assert_eq!(matched.query.get_str("lang"), Some("fr"));
///
/// let found = routes.find_and_get_urls("user", &Params::new().with("id", "7"), Some("fr"))?;
/// assert_eq!(found.urls.as_path, "/fr/user/7");
/// assert_eq!(found.urls.href, "/user?lang=fr&id=7");
/// # Ok::<(), locale_routes::RouteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Routes {
    routes: Vec<Route>,
    locales: Vec<String>,
    default_locale: String,
    prefix: String,
    /// Changes on every registration; clones share it until one of them
    /// registers a route
    table_id: u64,
}

impl Default for Routes {
    fn default() -> Self {
        Self::new(RoutesConfig::default())
    }
}

impl Routes {
    /// Create an empty registry
    pub fn new(config: RoutesConfig) -> Self {
        let RoutesConfig {
            locales,
            default_locale,
            prefix,
        } = config;

        Self {
            routes: Vec::new(),
            locales,
            default_locale,
            prefix,
            table_id: next_table_id(),
        }
    }

    /// Create a registry and register every definition in order
    pub fn from_definitions<I, D>(config: RoutesConfig, definitions: I) -> RouteResult<Self>
    where
        I: IntoIterator<Item = D>,
        D: Into<RouteDefinition>,
    {
        let mut routes = Self::new(config);
        for definition in definitions {
            routes.add(definition)?;
        }
        info_log!("Loaded {} routes", routes.len());
        Ok(routes)
    }

    /// Register a route
    ///
    /// The stored pattern is `/:lang(<locales>)?{prefix}{pattern}`, where
    /// `<locales>` are the registry locales minus the route's disabled ones.
    /// On error the registry is left unchanged.
    pub fn add(&mut self, definition: impl Into<RouteDefinition>) -> RouteResult<&mut Self> {
        let definition = definition.into();

        if let Some(name) = definition.name.as_deref() {
            if self.find_by_name(name).is_some() {
                return Err(RouteError::DuplicateRoute {
                    name: name.to_string(),
                });
            }
        }

        let pattern = definition.pattern.as_deref().filter(|p| !p.is_empty());
        let path = match (pattern, &definition.name, &definition.page) {
            (Some(pattern), _, _) => pattern.to_string(),
            (None, Some(name), _) => format!("/{}", name),
            (None, None, Some(page)) => format!("/{}", page.trim_start_matches('/')),
            (None, None, None) => {
                return Err(RouteError::Configuration {
                    pattern: String::new(),
                })
            }
        };

        let locales = self
            .locales
            .iter()
            .filter(|locale| !definition.disabled_locales.contains(locale))
            .map(|locale| regex::escape(locale))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!("/:{}({})?{}{}", LANG_KEY, locales, self.prefix, path);

        let route = Route::new(
            RouteDefinition {
                pattern: Some(pattern),
                ..definition
            },
            self.default_locale.clone(),
        )
        .map_err(|error| {
            error_log!("Cannot register route: {}", error);
            error
        })?;

        debug_log!(
            "Registered route {:?} -> '{}' (page '{}')",
            route.name(),
            route.pattern(),
            route.page()
        );
        self.routes.push(route);
        self.table_id = next_table_id();
        Ok(self)
    }

    /// Find a named route
    pub fn find_by_name(&self, name: &str) -> Option<&Route> {
        if name.is_empty() {
            return None;
        }
        self.routes.iter().find(|route| route.name() == Some(name))
    }

    /// Resolve a URL to the first matching route
    ///
    /// Never fails: when nothing matches, `route` is `None` and the query and
    /// parsed URL are still returned for a fallback handler.
    pub fn match_url(&self, url: &str) -> MatchResult<'_> {
        let parsed_url = ParsedUrl::parse(url);
        let mut query = parsed_url.query.clone();

        let found = self
            .routes
            .iter()
            .find_map(|route| Some((route, route.matches(&parsed_url.pathname)?)));

        let (route, params) = match found {
            Some((route, params)) => {
                trace_log!("'{}' matched route '{}'", url, route.pattern());
                (Some(route), params)
            }
            None => {
                trace_log!("No route matched '{}'", url);
                (None, Params::new())
            }
        };

        query.merge(&params);
        let has_language = query.get_str(LANG_KEY).is_some_and(|lang| !lang.is_empty());
        if !has_language {
            query.insert(LANG_KEY, self.default_locale.as_str());
        }

        MatchResult {
            route,
            params,
            query,
            parsed_url,
        }
    }

    /// Generate URLs from a route name or pass a literal URL through
    ///
    /// A known name generates both addresses from `params`. Anything else is
    /// treated as a URL: if it matches a route, `href` is rebuilt from the
    /// match, otherwise both addresses are the input unchanged.
    pub fn find_and_get_urls(
        &self,
        name_or_url: &str,
        params: &Params,
        language: Option<&str>,
    ) -> RouteResult<FoundUrls<'_>> {
        if let Some(route) = self.find_by_name(name_or_url) {
            return Ok(FoundUrls {
                route: Some(route),
                urls: route.urls(params, language)?,
                by_name: true,
            });
        }

        let MatchResult { route, query, .. } = self.match_url(name_or_url);
        let href = route.map_or_else(|| name_or_url.to_string(), |route| route.href(&query, None));

        Ok(FoundUrls {
            route,
            urls: Urls {
                href,
                as_path: name_or_url.to_string(),
            },
            by_name: false,
        })
    }

    /// Registered routes in match order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if no route is registered
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Identity of the current routing table
    ///
    /// Two registries with the same id hold the same routes.
    pub fn table_id(&self) -> u64 {
        self.table_id
    }
}
