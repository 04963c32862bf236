//! Route parameters and query values
//!
//! [`Params`] is the single bag type used on both sides of the router: the
//! matcher fills it from path captures and the query string, and the URL
//! generators read from it. It keeps insertion order because the order of
//! entries is the order in which they are serialized into a query string.

use std::fmt;
use std::str::FromStr;

/// A single parameter value
///
/// `Null` entries are kept in the bag but skipped when serializing, which
/// lets callers pass optional values straight through.
///
/// # Example
///
/// ```
/// use locale_routes::ParamValue;
///
/// assert_eq!(ParamValue::from("42").as_str(), Some("42"));
/// assert_eq!(ParamValue::from(vec!["a", "b"]).to_query_value(), Some("a/b".to_string()));
/// assert!(ParamValue::from(None::<String>).is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParamValue {
    /// No value; dropped from generated query strings
    #[default]
    Null,
    /// A scalar value
    Single(String),
    /// Several values, e.g. a repeated query key or a repeat capture
    List(Vec<String>),
}

impl ParamValue {
    /// Check if this value is `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    /// Get the scalar value, or the first value of a list
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Null => None,
            ParamValue::Single(value) => Some(value),
            ParamValue::List(values) => values.first().map(String::as_str),
        }
    }

    /// Value as it appears in a query string, list entries joined with `/`
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            ParamValue::Null => None,
            ParamValue::Single(value) => Some(value.clone()),
            ParamValue::List(values) => Some(values.join("/")),
        }
    }

    /// Append another value, turning a scalar into a list
    fn push(&mut self, value: String) {
        match self {
            ParamValue::Null => *self = ParamValue::Single(value),
            ParamValue::Single(first) => {
                let first = std::mem::take(first);
                *self = ParamValue::List(vec![first, value]);
            }
            ParamValue::List(values) => values.push(value),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_query_value() {
            Some(value) => f.write_str(&value),
            None => Ok(()),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Single(value.clone())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::List(values.into_iter().map(str::to_string).collect())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

/// Ordered parameter bag
///
/// # Example
///
/// ```
/// use locale_routes::Params;
///
/// let params = Params::new().with("id", "42").with("tab", "posts");
///
/// assert_eq!(params.get_str("id"), Some("42"));
/// assert_eq!(params.get_as::<u32>("id"), Some(42));
/// assert_eq!(params.keys().collect::<Vec<_>>(), vec!["id", "tab"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create new empty params
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (without the leading `?`)
    ///
    /// Keys and values are form-decoded (`+` is a space). A key that appears
    /// more than once collects its values into a [`ParamValue::List`].
    ///
    /// ```
    /// use locale_routes::{ParamValue, Params};
    ///
    /// let query = Params::from_query_string("page=1&tag=rust&tag=web");
    /// assert_eq!(query.get_str("page"), Some("1"));
    /// assert_eq!(
    ///     query.get("tag"),
    ///     Some(&ParamValue::List(vec!["rust".into(), "web".into()]))
    /// );
    /// ```
    pub fn from_query_string(query: &str) -> Self {
        let mut params = Self::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            params.append(key.into_owned(), value.into_owned());
        }
        params
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, replacing an existing one in place
    ///
    /// Returns the previous value if the key was present.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Add a value for a key, keeping the values already stored
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => existing.push(value),
            None => self.entries.push((key, ParamValue::Single(value))),
        }
    }

    /// Get a value
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Get a value as a string slice (first entry for lists)
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Get a parameter and parse it as a specific type
    ///
    /// Returns `None` if the parameter doesn't exist or cannot be parsed.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: FromStr,
    {
        self.get_str(key)?.parse().ok()
    }

    /// Check if a key is present (including `Null` entries)
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Remove a key, returning its value
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Copy every entry of `other` over this bag; `other` wins on collisions
    pub fn merge(&mut self, other: &Params) {
        for (key, value) in other.iter() {
            self.insert(key, value.clone());
        }
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Keep only the entries whose key satisfies `keep`
    pub fn filtered(&self, mut keep: impl FnMut(&str) -> bool) -> Params {
        self.entries
            .iter()
            .filter(|(k, _)| keep(k))
            .cloned()
            .collect()
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
