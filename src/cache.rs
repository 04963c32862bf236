//! Match result caching
//!
//! Resolving a URL walks every route until one matches. Servers that see the
//! same URLs over and over can keep a [`MatchCache`] next to the registry and
//! resolve through it instead; entries are evicted least-recently-used.

use crate::params::Params;
use crate::parsed_url::ParsedUrl;
use crate::registry::{MatchResult, Routes};
use crate::trace_log;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Stored match, with the route kept as its index in the registry
#[derive(Debug, Clone)]
struct CachedMatch {
    route_index: Option<usize>,
    params: Params,
    query: Params,
    parsed_url: ParsedUrl,
}

/// Cache performance statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub invalidations: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of [`Routes::match_url`] results
///
/// The cache remembers which routing table it was filled from (see
/// [`Routes::table_id`]) and clears itself when asked to resolve against a
/// different one, including the same registry after a registration.
///
/// # Example
///
/// ```
/// use locale_routes::{MatchCache, Routes, RoutesConfig};
///
/// let mut routes = Routes::new(RoutesConfig::new());
/// routes.add(("user", "/user/:id", "user")).unwrap();
///
/// let mut cache = MatchCache::new();
/// let first = cache.resolve(&routes, "/user/1");
/// let second = cache.resolve(&routes, "/user/1");
///
/// assert_eq!(first.query, second.query);
/// assert_eq!(cache.stats().hits, 1);
/// ```
#[derive(Debug)]
pub struct MatchCache {
    entries: LruCache<String, CachedMatch>,
    table_id: Option<u64>,
    stats: CacheStats,
}

impl MatchCache {
    const DEFAULT_CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` URLs (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(cap),
            table_id: None,
            stats: CacheStats::default(),
        }
    }

    /// Resolve a URL, reusing a previous result when there is one
    pub fn resolve<'r>(&mut self, routes: &'r Routes, url: &str) -> MatchResult<'r> {
        if self.table_id != Some(routes.table_id()) {
            if !self.entries.is_empty() {
                self.clear();
            }
            self.table_id = Some(routes.table_id());
        }

        if let Some(cached) = self.entries.get(url) {
            self.stats.hits += 1;
            trace_log!("Match cache hit for '{}'", url);
            return MatchResult {
                route: cached
                    .route_index
                    .and_then(|index| routes.routes().get(index)),
                params: cached.params.clone(),
                query: cached.query.clone(),
                parsed_url: cached.parsed_url.clone(),
            };
        }

        self.stats.misses += 1;
        trace_log!("Match cache miss for '{}'", url);

        let result = routes.match_url(url);
        let route_index = result.route.and_then(|route| {
            routes
                .routes()
                .iter()
                .position(|candidate| std::ptr::eq(candidate, route))
        });
        self.entries.push(
            url.to_string(),
            CachedMatch {
                route_index,
                params: result.params.clone(),
                query: result.query.clone(),
                parsed_url: result.parsed_url.clone(),
            },
        );
        result
    }

    pub fn clear(&mut self) {
        trace_log!("Clearing match cache");
        self.entries.clear();
        self.stats.invalidations += 1;
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Number of cached URLs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MatchCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MatchCache {
    fn clone(&self) -> Self {
        Self {
            entries: LruCache::new(self.entries.cap()),
            table_id: None,
            stats: self.stats.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RoutesConfig;
    use crate::route::Route;

    fn routes() -> Routes {
        let mut routes = Routes::new(RoutesConfig::new().locales(["en", "fr"]));
        routes
            .add(("user", "/user/:id", "user"))
            .unwrap()
            .add(("about", "/about", "about"))
            .unwrap();
        routes
    }

    #[test]
    fn test_cache_creation() {
        let cache = MatchCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), &CacheStats::default());
    }

    #[test]
    fn test_miss_then_hit() {
        let routes = routes();
        let mut cache = MatchCache::new();

        let first = cache.resolve(&routes, "/fr/user/9?tab=a");
        let second = cache.resolve(&routes, "/fr/user/9?tab=a");

        assert_eq!(cache.stats().misses, 1);
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(
            first.route.and_then(Route::name),
            second.route.and_then(Route::name)
        );
        assert_eq!(first.params, second.params);
        assert_eq!(first.query, second.query);
        assert_eq!(first.parsed_url, second.parsed_url);
    }

    #[test]
    fn test_misses_are_cached_too() {
        let routes = routes();
        let mut cache = MatchCache::new();

        assert!(!cache.resolve(&routes, "/nope").is_match());
        assert!(!cache.resolve(&routes, "/nope").is_match());
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_invalidated_when_routes_added() {
        let mut routes = routes();
        let mut cache = MatchCache::new();

        assert!(!cache.resolve(&routes, "/contact").is_match());
        routes.add("contact").unwrap();

        let result = cache.resolve(&routes, "/contact");
        assert_eq!(result.route.and_then(Route::name), Some("contact"));
        assert_eq!(cache.stats().invalidations, 1);
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_invalidated_for_other_registry_of_same_size() {
        let users = routes();
        let mut posts = Routes::new(RoutesConfig::new().locales(["en", "fr"]));
        posts
            .add(("post", "/post/:id", "post"))
            .unwrap()
            .add(("about", "/about", "about"))
            .unwrap();

        let mut cache = MatchCache::new();
        assert!(cache.resolve(&users, "/user/1").is_match());

        let result = cache.resolve(&posts, "/user/1");
        assert!(result.route.is_none());
        assert_eq!(cache.stats().invalidations, 1);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_invalidated_for_diverged_clone() {
        let mut original = Routes::new(RoutesConfig::new());
        original.add(("user", "/user/:id", "user")).unwrap();
        let mut other = original.clone();

        let mut cache = MatchCache::new();
        cache.resolve(&original, "/user/1");
        assert!(cache.resolve(&other, "/user/1").is_match());
        assert_eq!(cache.stats().hits, 1);

        original.add(("about", "/about", "about")).unwrap();
        other.add(("contact", "/contact", "contact")).unwrap();

        cache.resolve(&original, "/contact");
        let result = cache.resolve(&other, "/contact");
        assert_eq!(result.route.and_then(Route::name), Some("contact"));
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_lru_eviction() {
        let routes = routes();
        let mut cache = MatchCache::with_capacity(2);

        cache.resolve(&routes, "/user/1");
        cache.resolve(&routes, "/user/2");
        cache.resolve(&routes, "/user/3");
        assert_eq!(cache.len(), 2);

        cache.resolve(&routes, "/user/1");
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_zero_capacity_holds_one() {
        let routes = routes();
        let mut cache = MatchCache::with_capacity(0);
        cache.resolve(&routes, "/about");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_hit_rate_calculation() {
        let routes = routes();
        let mut cache = MatchCache::new();
        for url in ["/a", "/b", "/c", "/a", "/b"] {
            cache.resolve(&routes, url);
        }

        assert_eq!(cache.stats().hits, 2);
        assert_eq!(cache.stats().misses, 3);
        assert!((cache.stats().hit_rate() - 0.4).abs() < 0.001);

        cache.reset_stats();
        assert_eq!(cache.stats().hits, 0);
    }
}
