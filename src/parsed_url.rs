//! Incoming URL parsing
//!
//! Splits a request URL into the pieces the registry needs: the pathname
//! that is matched against route patterns and the decoded query bag.
//! Absolute URLs go through the `url` crate; relative references are split
//! by hand so the observed pathname is kept exactly as received.

use crate::params::Params;
use url::Url;

/// A request URL broken into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// The URL exactly as it was received
    pub href: String,
    /// Path portion, still percent-encoded
    pub pathname: String,
    /// Raw query string without the leading `?`
    pub search: Option<String>,
    /// Decoded query parameters
    pub query: Params,
    /// Fragment without the leading `#`
    pub hash: Option<String>,
}

impl ParsedUrl {
    /// Parse an absolute URL or a relative reference
    ///
    /// # Example
    ///
    /// ```
    /// use locale_routes::ParsedUrl;
    ///
    /// let url = ParsedUrl::parse("/fr/blog/hello?page=2#top");
    /// assert_eq!(url.pathname, "/fr/blog/hello");
    /// assert_eq!(url.query.get_str("page"), Some("2"));
    /// assert_eq!(url.hash.as_deref(), Some("top"));
    /// ```
    pub fn parse(input: &str) -> Self {
        match Url::parse(input) {
            Ok(absolute) if !absolute.cannot_be_a_base() => Self {
                href: input.to_string(),
                pathname: absolute.path().to_string(),
                search: absolute.query().map(str::to_string),
                query: absolute
                    .query()
                    .map(Params::from_query_string)
                    .unwrap_or_default(),
                hash: absolute.fragment().map(str::to_string),
            },
            _ => Self::parse_relative(input),
        }
    }

    fn parse_relative(input: &str) -> Self {
        let (rest, hash) = match input.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (input, None),
        };
        let (pathname, search) = match rest.split_once('?') {
            Some((path, search)) => (path, Some(search.to_string())),
            None => (rest, None),
        };

        Self {
            href: input.to_string(),
            pathname: pathname.to_string(),
            query: search
                .as_deref()
                .map(Params::from_query_string)
                .unwrap_or_default(),
            search,
            hash,
        }
    }
}
