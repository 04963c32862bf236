//! Programmatic navigation
//!
//! [`Navigator`] resolves a route name or literal URL through the registry
//! and forwards the resulting `href`/`as` pair to a [`NavigationTarget`],
//! which is whatever owns the client-side history. [`MemoryHistory`] is an
//! in-memory target for servers and tests.

use crate::error::RouteResult;
use crate::params::Params;
use crate::registry::{FoundUrls, Routes};
use crate::route::Urls;
use crate::trace_log;

// ============================================================================
// NavigationTarget
// ============================================================================

/// Receiver of resolved navigations
///
/// `options` are the extra navigation options: the caller's `options` when
/// the route was resolved by name, its `params` when it was a literal URL.
pub trait NavigationTarget {
    type Output;

    /// Navigate, adding a history entry
    fn push(&mut self, href: &str, as_path: &str, options: &Params) -> Self::Output;

    /// Navigate, replacing the current history entry
    fn replace(&mut self, href: &str, as_path: &str, options: &Params) -> Self::Output;

    /// Load a page ahead of navigation
    fn prefetch(&mut self, href: &str, as_path: &str, options: &Params) -> Self::Output;
}

impl<N: NavigationTarget + ?Sized> NavigationTarget for &mut N {
    type Output = N::Output;

    fn push(&mut self, href: &str, as_path: &str, options: &Params) -> Self::Output {
        (**self).push(href, as_path, options)
    }

    fn replace(&mut self, href: &str, as_path: &str, options: &Params) -> Self::Output {
        (**self).replace(href, as_path, options)
    }

    fn prefetch(&mut self, href: &str, as_path: &str, options: &Params) -> Self::Output {
        (**self).prefetch(href, as_path, options)
    }
}

// ============================================================================
// Navigator
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Push,
    Replace,
    Prefetch,
}

/// Registry-aware navigation bound to a target
///
/// # Example
///
/// ```
/// use locale_routes::{MemoryHistory, Params, Routes, RoutesConfig};
///
/// let mut routes = Routes::new(RoutesConfig::new().locales(["en", "fr"]));
/// routes.add(("user", "/user/:id", "user")).unwrap();
///
/// let mut history = MemoryHistory::new("/");
/// let mut navigator = routes.navigator(&mut history);
/// navigator
///     .push_route("user", &Params::new().with("id", "3"), &Params::new(), Some("fr"))
///     .unwrap();
///
/// assert_eq!(history.current().as_path, "/fr/user/3");
/// assert_eq!(history.current().href, "/user?lang=fr&id=3");
/// ```
#[derive(Debug)]
pub struct Navigator<'r, N> {
    routes: &'r Routes,
    target: N,
}

impl Routes {
    /// Bind a navigation target to this registry
    pub fn navigator<N: NavigationTarget>(&self, target: N) -> Navigator<'_, N> {
        Navigator {
            routes: self,
            target,
        }
    }
}

impl<'r, N: NavigationTarget> Navigator<'r, N> {
    /// Navigate to a route name or URL, adding a history entry
    pub fn push_route(
        &mut self,
        route: &str,
        params: &Params,
        options: &Params,
        language: Option<&str>,
    ) -> RouteResult<N::Output> {
        self.navigate(Method::Push, route, params, options, language)
    }

    /// Navigate to a route name or URL, replacing the current entry
    pub fn replace_route(
        &mut self,
        route: &str,
        params: &Params,
        options: &Params,
        language: Option<&str>,
    ) -> RouteResult<N::Output> {
        self.navigate(Method::Replace, route, params, options, language)
    }

    /// Prefetch a route name or URL
    pub fn prefetch_route(
        &mut self,
        route: &str,
        params: &Params,
        options: &Params,
        language: Option<&str>,
    ) -> RouteResult<N::Output> {
        self.navigate(Method::Prefetch, route, params, options, language)
    }

    fn navigate(
        &mut self,
        method: Method,
        route: &str,
        params: &Params,
        options: &Params,
        language: Option<&str>,
    ) -> RouteResult<N::Output> {
        let FoundUrls { urls, by_name, .. } =
            self.routes.find_and_get_urls(route, params, language)?;
        let Urls { href, as_path } = urls;
        let options = if by_name { options } else { params };

        trace_log!("{:?} '{}' as '{}'", method, href, as_path);
        Ok(match method {
            Method::Push => self.target.push(&href, &as_path, options),
            Method::Replace => self.target.replace(&href, &as_path, options),
            Method::Prefetch => self.target.prefetch(&href, &as_path, options),
        })
    }

    /// Registry used for resolution
    pub fn routes(&self) -> &'r Routes {
        self.routes
    }

    pub fn target(&self) -> &N {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut N {
        &mut self.target
    }

    /// Release the target
    pub fn into_target(self) -> N {
        self.target
    }
}

// ============================================================================
// MemoryHistory
// ============================================================================

/// Navigation direction of a [`NavigationEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Push,
    Replace,
    Back,
    Forward,
}

/// A recorded navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Page address
    pub href: String,
    /// Public path
    pub as_path: String,
    pub options: Params,
}

impl HistoryEntry {
    /// Entry whose page address and public path are the same URL
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            href: path.clone(),
            as_path: path,
            options: Params::new(),
        }
    }

    fn from_navigation(href: &str, as_path: &str, options: &Params) -> Self {
        Self {
            href: href.to_string(),
            as_path: as_path.to_string(),
            options: options.clone(),
        }
    }
}

/// Event returned by history moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    /// Public path before the move
    pub from: String,
    /// Public path after the move
    pub to: String,
    pub direction: NavigationDirection,
}

/// In-memory navigation history
///
/// Pushing truncates forward entries. Prefetches are recorded separately
/// and never move the cursor.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    current: usize,
    max_size: usize,
    prefetched: Vec<HistoryEntry>,
}

impl MemoryHistory {
    const DEFAULT_MAX_SIZE: usize = 1000;

    /// Create a history positioned at `initial_path`
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self::with_max_size(initial_path, Self::DEFAULT_MAX_SIZE)
    }

    /// Create a history keeping at most `max_size` entries (0 = unlimited)
    pub fn with_max_size(initial_path: impl Into<String>, max_size: usize) -> Self {
        Self {
            entries: vec![HistoryEntry::new(initial_path)],
            current: 0,
            max_size,
            prefetched: Vec::new(),
        }
    }

    /// Current entry
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.current]
    }

    /// Public path of the current entry
    pub fn current_path(&self) -> &str {
        &self.current().as_path
    }

    /// Go back one entry
    pub fn back(&mut self) -> Option<NavigationEvent> {
        if !self.can_go_back() {
            return None;
        }
        let from = self.current_path().to_string();
        self.current -= 1;
        Some(self.event(from, NavigationDirection::Back))
    }

    /// Go forward one entry
    pub fn forward(&mut self) -> Option<NavigationEvent> {
        if !self.can_go_forward() {
            return None;
        }
        let from = self.current_path().to_string();
        self.current += 1;
        Some(self.event(from, NavigationDirection::Forward))
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.entries.len()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least its initial entry
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Prefetch requests in the order they were made
    pub fn prefetched(&self) -> &[HistoryEntry] {
        &self.prefetched
    }

    /// Reset to a single entry
    pub fn clear(&mut self, initial_path: impl Into<String>) {
        self.entries.clear();
        self.entries.push(HistoryEntry::new(initial_path));
        self.current = 0;
        self.prefetched.clear();
    }

    fn event(&self, from: String, direction: NavigationDirection) -> NavigationEvent {
        NavigationEvent {
            from,
            to: self.current_path().to_string(),
            direction,
        }
    }

    fn enforce_size_limit(&mut self) {
        if self.max_size > 0 && self.entries.len() > self.max_size {
            let excess = self.entries.len() - self.max_size;
            self.entries.drain(0..excess);
            self.current = self.current.saturating_sub(excess);
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl NavigationTarget for MemoryHistory {
    type Output = Option<NavigationEvent>;

    fn push(&mut self, href: &str, as_path: &str, options: &Params) -> Self::Output {
        let from = self.current_path().to_string();

        self.entries.truncate(self.current + 1);
        self.entries
            .push(HistoryEntry::from_navigation(href, as_path, options));
        self.current += 1;
        self.enforce_size_limit();

        Some(self.event(from, NavigationDirection::Push))
    }

    fn replace(&mut self, href: &str, as_path: &str, options: &Params) -> Self::Output {
        let from = self.current_path().to_string();
        self.entries[self.current] = HistoryEntry::from_navigation(href, as_path, options);

        Some(self.event(from, NavigationDirection::Replace))
    }

    fn prefetch(&mut self, href: &str, as_path: &str, options: &Params) -> Self::Output {
        self.prefetched
            .push(HistoryEntry::from_navigation(href, as_path, options));
        None
    }
}
