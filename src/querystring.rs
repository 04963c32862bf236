//! Query string serialization

use crate::params::Params;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left untouched by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single key or value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Serialize a parameter bag into `key1=val1&key2=val2`
///
/// Entries keep the bag's order, `Null` entries are dropped and list values
/// are joined with `/` before encoding.
///
/// # Example
///
/// ```
/// use locale_routes::{to_querystring, Params};
///
/// let params = Params::new()
///     .with("q", "rust lang")
///     .with("tags", vec!["a", "b"])
///     .with("skip", None::<String>);
///
/// assert_eq!(to_querystring(&params), "q=rust%20lang&tags=a%2Fb");
/// ```
pub fn to_querystring(params: &Params) -> String {
    params
        .iter()
        .filter_map(|(key, value)| {
            let value = value.to_query_value()?;
            Some(format!(
                "{}={}",
                encode_component(key),
                encode_component(&value)
            ))
        })
        .collect::<Vec<_>>()
        .join("&")
}
