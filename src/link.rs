//! Link resolution
//!
//! A link component names its target either by route name or by literal
//! URL. [`Routes::link`] turns that into the `href`/`as` pair the consumer
//! puts on its anchor element.

use crate::error::RouteResult;
use crate::params::{ParamValue, Params};
use crate::registry::Routes;
use crate::route::Urls;

/// Link target description
///
/// # Example
///
/// ```
/// use locale_routes::{LinkProps, Routes, RoutesConfig};
///
/// let mut routes = Routes::new(RoutesConfig::new().locales(["en", "fr"]));
/// routes.add(("post", "/blog/:slug", "post")).unwrap();
///
/// let urls = routes
///     .link(&LinkProps::route("post").param("slug", "hello").language("fr"))
///     .unwrap()
///     .unwrap();
///
/// assert_eq!(urls.href, "/post?lang=fr&slug=hello");
/// assert_eq!(urls.as_path, "/fr/blog/hello");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkProps {
    /// Route name to link to
    pub route: Option<String>,
    /// Literal URL to link to, used when `route` is not set
    pub to: Option<String>,
    pub params: Params,
    pub language: Option<String>,
}

impl LinkProps {
    /// Link to a named route
    pub fn route(name: impl Into<String>) -> Self {
        Self {
            route: Some(name.into()),
            ..Self::default()
        }
    }

    /// Link to a literal URL
    pub fn to(url: impl Into<String>) -> Self {
        Self {
            to: Some(url.into()),
            ..Self::default()
        }
    }

    /// Add a single parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Replace all parameters
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Set the link language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Name or URL the link resolves, `route` taking precedence
    pub fn target(&self) -> Option<&str> {
        self.route.as_deref().or(self.to.as_deref())
    }
}

impl Routes {
    /// Resolve a link
    ///
    /// Returns `None` when the props name no target, in which case the
    /// consumer keeps whatever href it already has.
    pub fn link(&self, props: &LinkProps) -> RouteResult<Option<Urls>> {
        let Some(target) = props.target().filter(|target| !target.is_empty()) else {
            return Ok(None);
        };

        let found = self.find_and_get_urls(target, &props.params, props.language.as_deref())?;
        Ok(Some(found.urls))
    }
}
