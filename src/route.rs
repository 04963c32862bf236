//! Route definition and URL generation

use crate::error::{RouteError, RouteResult};
use crate::params::Params;
use crate::pattern::RoutePattern;
use crate::querystring::to_querystring;
use crate::warn_log;

// ============================================================================
// RouteDefinition
// ============================================================================

/// Registration input for a route
///
/// Any of the fields may be left out: a route without a page renders the
/// page named after the route, and a route without a pattern is served at
/// `/{name}`. A route needs at least a name or a page.
///
/// # Example
///
/// ```
/// use locale_routes::RouteDefinition;
///
/// // Named route
/// let about = RouteDefinition::named("about").pattern("/about-us");
///
/// // Unnamed route, only reachable by URL
/// let blog = RouteDefinition::with_pattern("/blog/:slug").page("blog");
///
/// // Shorthand conversions
/// let user: RouteDefinition = ("user", "/user/:id", "profile").into();
/// assert_eq!(user.page.as_deref(), Some("profile"));
///
/// let post: RouteDefinition = ("/post/:id", "post").into();
/// assert_eq!(post.name, None);
/// assert_eq!(post.pattern.as_deref(), Some("/post/:id"));
/// # let _ = (about, blog);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouteDefinition {
    /// Route name used for reverse lookups
    pub name: Option<String>,
    /// Path pattern, without the locale prefix
    pub pattern: Option<String>,
    /// Page template the route renders
    pub page: Option<String>,
    /// Registry locales this route is not served under
    #[cfg_attr(feature = "serde", serde(alias = "disable_locales"))]
    pub disabled_locales: Vec<String>,
}

impl RouteDefinition {
    /// Create an empty definition
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a named definition
    pub fn named(name: impl Into<String>) -> Self {
        Self::new().name(name)
    }

    /// Create an unnamed definition from a pattern
    pub fn with_pattern(pattern: impl Into<String>) -> Self {
        Self::new().pattern(pattern)
    }

    /// Set route name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set path pattern
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set page to render
    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Exclude a single locale for this route
    pub fn disable_locale(mut self, locale: impl Into<String>) -> Self {
        self.disabled_locales.push(locale.into());
        self
    }

    /// Exclude several locales for this route
    pub fn disable_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled_locales
            .extend(locales.into_iter().map(Into::into));
        self
    }
}

/// A leading `/` means the string is a pattern, anything else is a name
impl From<&str> for RouteDefinition {
    fn from(name_or_pattern: &str) -> Self {
        if name_or_pattern.starts_with('/') {
            RouteDefinition::with_pattern(name_or_pattern)
        } else {
            RouteDefinition::named(name_or_pattern)
        }
    }
}

/// `(name, pattern)` or, with a leading `/`, `(pattern, page)`
impl From<(&str, &str)> for RouteDefinition {
    fn from((first, second): (&str, &str)) -> Self {
        if first.starts_with('/') {
            RouteDefinition::with_pattern(first).page(second)
        } else {
            RouteDefinition::named(first).pattern(second)
        }
    }
}

/// `(name, pattern, page)` or, with a leading `/`, `(pattern, page, _)`
impl From<(&str, &str, &str)> for RouteDefinition {
    fn from((first, second, third): (&str, &str, &str)) -> Self {
        if first.starts_with('/') {
            RouteDefinition::with_pattern(first).page(second)
        } else {
            RouteDefinition::named(first).pattern(second).page(third)
        }
    }
}

// ============================================================================
// Route
// ============================================================================

/// Generated addresses for a route
///
/// `href` addresses the page template with every parameter in the query
/// string; `as_path` is the public path shown to users.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Urls {
    pub href: String,
    #[cfg_attr(feature = "serde", serde(rename = "as"))]
    pub as_path: String,
}

/// A compiled route
///
/// Routes are created by [`Routes::add`](crate::Routes::add), which prefixes
/// the pattern with the locale capture, and never change afterwards.
#[derive(Debug, Clone)]
pub struct Route {
    name: Option<String>,
    page: String,
    pattern: RoutePattern,
    default_locale: String,
}

impl Route {
    /// Compile a route from its definition
    ///
    /// The pattern is used as given; locale prefixing is the registry's job.
    pub fn new(definition: RouteDefinition, default_locale: impl Into<String>) -> RouteResult<Self> {
        let RouteDefinition {
            name, pattern, page, ..
        } = definition;

        if name.as_deref() == Some("") {
            return Err(RouteError::Configuration {
                pattern: pattern.unwrap_or_default(),
            });
        }

        let Some(page) = page.or_else(|| name.clone()) else {
            return Err(RouteError::Configuration {
                pattern: pattern.unwrap_or_default(),
            });
        };

        let pattern = pattern.unwrap_or_else(|| {
            format!(
                "/{}",
                name.as_deref().unwrap_or_else(|| page.trim_start_matches('/'))
            )
        });

        Ok(Self {
            name,
            page: normalize_page(&page),
            pattern: RoutePattern::compile(&pattern)?,
            default_locale: default_locale.into(),
        })
    }

    /// Route name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Normalized page path (`/blog`, `/` for index pages)
    pub fn page(&self) -> &str {
        &self.page
    }

    /// Pattern string, including the locale prefix
    pub fn pattern(&self) -> &str {
        self.pattern.source()
    }

    /// Compiled pattern
    pub fn compiled(&self) -> &RoutePattern {
        &self.pattern
    }

    /// Locale that is never spelled out in generated URLs
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Match a path against this route
    pub fn matches(&self, path: &str) -> Option<Params> {
        self.pattern.matches(path)
    }

    /// Language to spell out, if it differs from the default locale
    fn explicit_language<'a>(&self, language: Option<&'a str>) -> Option<&'a str> {
        language.filter(|lang| !lang.is_empty() && *lang != self.default_locale)
    }

    /// Build the page address: `{page}?{lang=..&}{params}`
    ///
    /// Every parameter, path captures included, goes into the query string.
    ///
    /// ```
    /// use locale_routes::{Params, Routes, RoutesConfig};
    ///
    /// let mut routes = Routes::new(RoutesConfig::new().locales(["en", "fr"]));
    /// routes.add(("user", "/user/:id", "user")).unwrap();
    /// let route = routes.find_by_name("user").unwrap();
    ///
    /// let params = Params::new().with("id", "42");
    /// assert_eq!(route.href(&params, None), "/user?id=42");
    /// assert_eq!(route.href(&params, Some("fr")), "/user?lang=fr&id=42");
    /// ```
    pub fn href(&self, params: &Params, language: Option<&str>) -> String {
        let language_query = self
            .explicit_language(language)
            .map(|lang| format!("lang={}&", lang))
            .unwrap_or_default();

        format!("{}?{}{}", self.page, language_query, to_querystring(params))
    }

    /// Build the public path
    ///
    /// Captures are substituted into the pattern, parameters that are not
    /// captures are appended as a query string.
    ///
    /// ```
    /// use locale_routes::{Params, Routes, RoutesConfig};
    ///
    /// let mut routes = Routes::new(RoutesConfig::new().locales(["en", "fr"]));
    /// routes.add(("user", "/user/:id", "user")).unwrap();
    /// let route = routes.find_by_name("user").unwrap();
    ///
    /// let params = Params::new().with("id", "42").with("tab", "posts");
    /// assert_eq!(route.as_path(&params, None).unwrap(), "/user/42?tab=posts");
    /// assert_eq!(route.as_path(&params, Some("fr")).unwrap(), "/fr/user/42?tab=posts");
    /// ```
    pub fn as_path(&self, params: &Params, language: Option<&str>) -> RouteResult<String> {
        let path = self.pattern.generate(params).map_err(|error| {
            warn_log!("Route {:?}: {}", self.name, error);
            error
        })?;

        let as_path = if path.is_empty() {
            "/".to_string()
        } else {
            match self.explicit_language(language) {
                Some(lang) => format!("/{}{}", lang, path),
                None => path,
            }
        };

        let leftover = params.filtered(|key| !self.pattern.has_key(key));
        let query = to_querystring(&leftover);
        if query.is_empty() {
            return Ok(as_path);
        }

        Ok(format!("{}?{}", as_path, query))
    }

    /// Build both the page address and the public path
    pub fn urls(&self, params: &Params, language: Option<&str>) -> RouteResult<Urls> {
        let as_path = self.as_path(params, language)?;
        let href = self.href(params, language);
        Ok(Urls { href, as_path })
    }
}

/// Strip a trailing `index` segment and enforce a leading `/`
fn normalize_page(page: &str) -> String {
    let page = if page == "index" {
        ""
    } else {
        page.strip_suffix("/index").unwrap_or(page)
    };

    if page.starts_with('/') {
        page.to_string()
    } else {
        format!("/{}", page)
    }
}
