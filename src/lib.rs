//! # Locale Routes
//!
//! A named, locale-aware route registry for web applications with:
//!
//! - **Named Routes** - Generate URLs from route names and parameters
//! - **Locale Prefixes** - Every route is also served under `/{locale}/...`
//! - **Pattern Matching** - Captures with prefixes, modifiers and regex constraints
//! - **Bidirectional URLs** - Page address (`href`) and public path (`as`) from one call
//! - **Request Dispatch** - Render or fall back for incoming URLs
//! - **Navigation Adapters** - Links and history targets without global state
//!
//! # Quick Start
//!
//! ```
//! use locale_routes::{Params, Routes, RoutesConfig};
//!
//! let mut routes = Routes::new(
//!     RoutesConfig::new()
//!         .locales(["en", "fr"])
//!         .default_locale("en"),
//! );
//!
//! routes
//!     .add(("about", "/about", "about"))?
//!     .add(("blog", "/blog/:slug", "blog"))?
//!     .add(("user", "/user/:id(\\d+)", "profile"))?;
//!
//! // Incoming request
//! let matched = routes.match_url("/fr/blog/hello-world?ref=home");
//! assert_eq!(matched.route.map(|r| r.page()), Some("/blog"));
//! assert_eq!(matched.query.get_str("slug"), Some("hello-world"));
//! assert_eq!(matched.query.get_str("lang"), Some("fr"));
//!
//! // Outgoing link
//! let found = routes.find_and_get_urls("user", &Params::new().with("id", "42"), Some("fr"))?;
//! assert_eq!(found.urls.href, "/profile?lang=fr&id=42");
//! assert_eq!(found.urls.as_path, "/fr/user/42");
//! # Ok::<(), locale_routes::RouteError>(())
//! ```
//!
//! # Patterns
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `:name` | required segment |
//! | `:name?` | optional segment |
//! | `:name*` / `:name+` | zero or more / one or more segments |
//! | `:name(\\d+)` | segment constrained by a regex |
//! | `(\\d+)` | unnamed capture, keyed `0`, `1`, ... |
//!
//! Literal text matches case-insensitively and a trailing `/` is always
//! optional.
//!
//! # Navigation
//!
//! ```
//! use locale_routes::{MemoryHistory, Params, Routes, RoutesConfig};
//!
//! let mut routes = Routes::new(RoutesConfig::new().locales(["en", "fr"]));
//! routes.add("about")?;
//!
//! let mut history = MemoryHistory::new("/");
//! routes
//!     .navigator(&mut history)
//!     .push_route("about", &Params::new(), &Params::new(), Some("fr"))?;
//!
//! assert_eq!(history.current_path(), "/fr/about");
//! # Ok::<(), locale_routes::RouteError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `log` (default) - Uses the standard `log` crate for logging
//! - `tracing` - Uses the `tracing` crate for structured logging (mutually exclusive with `log`)
//! - `cache` (default) - LRU cache for match results ([`MatchCache`])
//! - `serde` - Load routing tables from config files

#![doc(html_root_url = "https://docs.rs/locale-routes/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
// Lints are configured in Cargo.toml [lints] section

// Logging abstraction
pub mod logging;

// Cache (optional)
#[cfg(feature = "cache")]
pub mod cache;

// Core routing modules
pub mod params;
pub mod parsed_url;
pub mod pattern;
pub mod querystring;
pub mod registry;
pub mod route;

// Error handling
pub mod error;

// Adapters
pub mod handler;
pub mod link;
pub mod navigator;

// Re-export main types for convenient access
#[cfg(feature = "cache")]
pub use cache::{CacheStats, MatchCache};
pub use error::{RouteError, RouteResult};
pub use handler::{Dispatch, FallbackHandler, RenderHandler, RequestHandler};
pub use link::LinkProps;
pub use navigator::{
    HistoryEntry, MemoryHistory, NavigationDirection, NavigationEvent, NavigationTarget, Navigator,
};
pub use params::{ParamValue, Params};
pub use parsed_url::ParsedUrl;
pub use pattern::{Capture, Constraint, RoutePattern, Token};
pub use querystring::{encode_component, to_querystring};
pub use registry::{FoundUrls, MatchResult, Routes, RoutesConfig, LANG_KEY};
pub use route::{Route, RouteDefinition, Urls};
