//! Route pattern compilation
//!
//! A pattern such as `/:lang(en|fr)?/blog/:slug` is tokenized once into a
//! sequence of literal fragments and named captures. The same token sequence
//! drives both directions:
//!
//! - [`RoutePattern::matches`] walks an observed path and extracts captures
//! - [`RoutePattern::generate`] substitutes parameters back into a path
//!
//! Supported syntax:
//! - `:name` - named capture; a directly preceding `/` or `.` is the
//!   capture's prefix and is only present when the capture is
//! - `:name(regex)` - capture constrained by a regular expression, which
//!   may match across `/`
//! - `(regex)` - unnamed capture, named `"0"`, `"1"`, ... in order
//! - `?` optional, `*` optional and repeated, `+` repeated
//! - `\x` - the character `x` as a literal
//!
//! Matching is case-insensitive and tolerates one trailing slash.

use crate::error::{RouteError, RouteResult};
use crate::params::{ParamValue, Params};
use percent_encoding::percent_decode_str;
use regex::Regex;

/// A compiled route pattern
#[derive(Debug, Clone)]
pub struct RoutePattern {
    source: String,
    tokens: Vec<Token>,
    keys: Vec<String>,
    /// Last token is a literal ending in `/`, which is optional when matching
    trailing_slash: bool,
}

/// A single token of a compiled pattern
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Text that must appear verbatim
    Literal(String),
    /// Placeholder that binds a value
    Capture(Capture),
}

/// A named placeholder
#[derive(Debug, Clone, PartialEq)]
pub struct Capture {
    pub name: String,
    /// `/` or `.` emitted before the value
    pub prefix: Option<char>,
    pub optional: bool,
    pub repeat: bool,
    pub constraint: Constraint,
}

/// Constraint for validating capture values
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Any value without a delimiter
    Any,
    /// User-supplied regular expression, anchored on both ends
    Pattern { source: String, regex: Regex },
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Constraint::Any, Constraint::Any) => true,
            (Constraint::Pattern { source: a, .. }, Constraint::Pattern { source: b, .. }) => {
                a == b
            }
            _ => false,
        }
    }
}

impl Constraint {
    fn parse(pattern: &str, body: &str) -> RouteResult<Self> {
        let regex = Regex::new(&format!("(?i)^(?:{})$", body)).map_err(|e| {
            RouteError::invalid_pattern(pattern, format!("invalid constraint ({}): {}", body, e))
        })?;
        Ok(Constraint::Pattern {
            source: body.to_string(),
            regex,
        })
    }

    /// Validate a value against this constraint
    pub fn validate(&self, value: &str) -> bool {
        match self {
            Constraint::Any => true,
            Constraint::Pattern { regex, .. } => regex.is_match(value),
        }
    }
}

impl Capture {
    /// Separator between repeated values
    fn delimiter(&self) -> char {
        self.prefix.unwrap_or('/')
    }

    fn is_delimiter(&self, c: char) -> bool {
        c == '/' || c == self.delimiter()
    }

    /// Check a single (non-repeated) value
    ///
    /// Unconstrained values stop at a delimiter; a constraint alone decides
    /// what it accepts, so `:path(.*)` may span segments.
    pub fn accepts(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        match self.constraint {
            Constraint::Any => !value.chars().any(|c| self.is_delimiter(c)),
            Constraint::Pattern { .. } => self.constraint.validate(value),
        }
    }

    /// Byte offsets at which a value for this capture may end in `input`,
    /// in the order they should be tried.
    fn candidate_ends(&self, input: &str) -> Vec<usize> {
        let chunk_len = |start: usize| {
            input[start..]
                .find(|c| self.is_delimiter(c))
                .unwrap_or(input.len() - start)
        };
        let lazy_ends = |start: usize| {
            let len = chunk_len(start);
            let chunk = &input[start..start + len];
            chunk
                .char_indices()
                .map(|(i, c)| i + c.len_utf8())
                .filter(|&end| self.accepts(&chunk[..end]))
                .map(|end| start + end)
                .collect::<Vec<_>>()
        };

        if !self.repeat {
            return match self.constraint {
                Constraint::Any => lazy_ends(0),
                Constraint::Pattern { .. } => input
                    .char_indices()
                    .map(|(i, c)| i + c.len_utf8())
                    .filter(|&end| self.accepts(&input[..end]))
                    .collect(),
            };
        }

        // Starts of every complete chunk separated by the delimiter, longest
        // run first; the last chunk of a run may end early.
        let delimiter = self.delimiter();
        let mut starts = vec![0];
        let mut start = 0;
        loop {
            let len = chunk_len(start);
            let end = start + len;
            if len == 0 || !self.accepts(&input[start..end]) {
                break;
            }
            if !input[end..].starts_with(delimiter) {
                break;
            }
            start = end + delimiter.len_utf8();
            starts.push(start);
        }

        starts.into_iter().rev().flat_map(lazy_ends).collect()
    }
}

impl RoutePattern {
    /// Compile a pattern string
    ///
    /// # Example
    ///
    /// ```
    /// use locale_routes::RoutePattern;
    ///
    /// let pattern = RoutePattern::compile("/user/:id/:tab?").unwrap();
    /// assert_eq!(pattern.keys(), ["id", "tab"]);
    ///
    /// let params = pattern.matches("/user/42").unwrap();
    /// assert_eq!(params.get_str("id"), Some("42"));
    /// assert!(!params.contains("tab"));
    /// ```
    pub fn compile(pattern: &str) -> RouteResult<Self> {
        let tokens = tokenize(pattern)?;
        let keys = tokens
            .iter()
            .filter_map(|token| match token {
                Token::Capture(capture) => Some(capture.name.clone()),
                Token::Literal(_) => None,
            })
            .collect();
        let trailing_slash = matches!(tokens.last(), Some(Token::Literal(lit)) if lit.ends_with('/'));

        Ok(Self {
            source: pattern.to_string(),
            tokens,
            keys,
            trailing_slash,
        })
    }

    /// The pattern string this was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Capture names in declaration order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Compiled tokens
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Check if `name` is one of this pattern's captures
    pub fn has_key(&self, name: &str) -> bool {
        self.keys.iter().any(|key| key == name)
    }

    /// Match this pattern against a path
    ///
    /// Returns the decoded captures if matched. Optional captures that did not
    /// participate are left out.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let mut captured = Vec::new();
        if !self.match_tokens(0, path, &mut captured) {
            return None;
        }

        Some(
            captured
                .into_iter()
                .map(|(name, raw)| (name.to_string(), decode(raw)))
                .collect(),
        )
    }

    fn match_tokens<'a>(
        &'a self,
        index: usize,
        rest: &'a str,
        captured: &mut Vec<(&'a str, &'a str)>,
    ) -> bool {
        let Some(token) = self.tokens.get(index) else {
            return rest.is_empty() || rest == "/";
        };

        match token {
            Token::Literal(literal) => {
                let literal = if self.trailing_slash && index + 1 == self.tokens.len() {
                    &literal[..literal.len() - 1]
                } else {
                    literal.as_str()
                };
                match strip_prefix_ignore_case(rest, literal) {
                    Some(remaining) => self.match_tokens(index + 1, remaining, captured),
                    None => false,
                }
            }
            Token::Capture(capture) => {
                let after_prefix = match capture.prefix {
                    Some(prefix) => rest.strip_prefix(prefix),
                    None => Some(rest),
                };

                if let Some(input) = after_prefix {
                    for end in capture.candidate_ends(input) {
                        captured.push((capture.name.as_str(), &input[..end]));
                        if self.match_tokens(index + 1, &input[end..], captured) {
                            return true;
                        }
                        captured.pop();
                    }
                }

                capture.optional && self.match_tokens(index + 1, rest, captured)
            }
        }
    }

    /// Build a concrete path from parameters
    ///
    /// Values are inserted as-is, without percent-encoding. Parameters that
    /// are not captures of this pattern are ignored.
    ///
    /// # Errors
    ///
    /// Fails when a required capture is missing or a value is rejected by
    /// its capture (wrong shape, contains a delimiter, or fails the
    /// constraint).
    pub fn generate(&self, params: &Params) -> RouteResult<String> {
        let mut path = String::new();

        for token in &self.tokens {
            let capture = match token {
                Token::Literal(literal) => {
                    path.push_str(literal);
                    continue;
                }
                Token::Capture(capture) => capture,
            };

            match params.get(&capture.name).unwrap_or(&ParamValue::Null) {
                ParamValue::Null => {
                    if !capture.optional {
                        return Err(self.generation_error(format!(
                            "missing required parameter \"{}\"",
                            capture.name
                        )));
                    }
                }
                ParamValue::Single(value) => {
                    self.check_value(capture, value)?;
                    if let Some(prefix) = capture.prefix {
                        path.push(prefix);
                    }
                    path.push_str(value);
                }
                ParamValue::List(values) => {
                    if !capture.repeat {
                        return Err(self.generation_error(format!(
                            "parameter \"{}\" does not accept a list",
                            capture.name
                        )));
                    }
                    if values.is_empty() && !capture.optional {
                        return Err(self.generation_error(format!(
                            "parameter \"{}\" needs at least one value",
                            capture.name
                        )));
                    }
                    for (i, value) in values.iter().enumerate() {
                        self.check_value(capture, value)?;
                        if i == 0 {
                            if let Some(prefix) = capture.prefix {
                                path.push(prefix);
                            }
                        } else {
                            path.push(capture.delimiter());
                        }
                        path.push_str(value);
                    }
                }
            }
        }

        Ok(path)
    }

    fn check_value(&self, capture: &Capture, value: &str) -> RouteResult<()> {
        if capture.accepts(value) {
            return Ok(());
        }
        let expected = match &capture.constraint {
            Constraint::Any => "a non-empty segment".to_string(),
            Constraint::Pattern { source, .. } => format!("\"{}\"", source),
        };
        Err(self.generation_error(format!(
            "expected \"{}\" to match {}, got \"{}\"",
            capture.name, expected, value
        )))
    }

    fn generation_error(&self, reason: String) -> RouteError {
        RouteError::generation(&self.source, reason)
    }
}

fn tokenize(pattern: &str) -> RouteResult<Vec<Token>> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut unnamed = 0usize;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        let (name, body) = match c {
            '\\' => {
                let escaped = chars.get(i + 1).ok_or_else(|| {
                    RouteError::invalid_pattern(pattern, "dangling escape at end of pattern")
                })?;
                literal.push(*escaped);
                i += 2;
                continue;
            }
            ':' if chars.get(i + 1).is_some_and(|&c| is_word_char(c)) => {
                let start = i + 1;
                i = start;
                while i < chars.len() && is_word_char(chars[i]) {
                    i += 1;
                }
                let name: String = chars[start..i].iter().collect();
                let body = if chars.get(i) == Some(&'(') {
                    let (body, next) = read_group(pattern, &chars, i)?;
                    i = next;
                    Some(body)
                } else {
                    None
                };
                (name, body)
            }
            '(' => {
                let (body, next) = read_group(pattern, &chars, i)?;
                i = next;
                let name = unnamed.to_string();
                unnamed += 1;
                (name, Some(body))
            }
            ')' => {
                return Err(RouteError::invalid_pattern(
                    pattern,
                    format!("unmatched ')' at position {}", i),
                ));
            }
            _ => {
                literal.push(c);
                i += 1;
                continue;
            }
        };

        let prefix = match literal.chars().last() {
            Some(p @ ('/' | '.')) => {
                literal.pop();
                Some(p)
            }
            _ => None,
        };
        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(&mut literal)));
        }

        let modifier = chars.get(i).copied().filter(|m| matches!(m, '?' | '*' | '+'));
        if modifier.is_some() {
            i += 1;
        }

        let duplicate = tokens
            .iter()
            .any(|token| matches!(token, Token::Capture(existing) if existing.name == name));
        if duplicate {
            return Err(RouteError::invalid_pattern(
                pattern,
                format!("duplicate capture name \"{}\"", name),
            ));
        }

        let constraint = match body {
            Some(body) => Constraint::parse(pattern, &body)?,
            None => Constraint::Any,
        };

        tokens.push(Token::Capture(Capture {
            name,
            prefix,
            optional: matches!(modifier, Some('?' | '*')),
            repeat: matches!(modifier, Some('*' | '+')),
            constraint,
        }));
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }

    Ok(tokens)
}

/// Read a parenthesized group starting at `open`; returns the body and the
/// index just past the closing parenthesis.
fn read_group(pattern: &str, chars: &[char], open: usize) -> RouteResult<(String, usize)> {
    let mut depth = 0usize;
    let mut body = String::new();
    let mut i = open;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' => {
                body.push(c);
                if let Some(&next) = chars.get(i + 1) {
                    body.push(next);
                }
                i += 2;
                continue;
            }
            '(' => {
                depth += 1;
                if depth > 1 {
                    body.push(c);
                }
            }
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((body, i + 1));
                }
                body.push(c);
            }
            _ => body.push(c),
        }
        i += 1;
    }

    Err(RouteError::invalid_pattern(
        pattern,
        format!("unclosed group starting at position {}", open),
    ))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&input[prefix.len()..])
    } else {
        None
    }
}

/// Percent-decode a captured value; malformed input is kept as-is
fn decode(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn compile(pattern: &str) -> RoutePattern {
        RoutePattern::compile(pattern).unwrap()
    }

    #[test]
    fn test_tokenize_static_and_param() {
        let pattern = compile("/users/:id");
        assert_eq!(pattern.tokens().len(), 2);
        assert_eq!(pattern.tokens()[0], Token::Literal("/users".to_string()));
        match &pattern.tokens()[1] {
            Token::Capture(capture) => {
                assert_eq!(capture.name, "id");
                assert_eq!(capture.prefix, Some('/'));
                assert!(!capture.optional);
                assert!(!capture.repeat);
                assert_eq!(capture.constraint, Constraint::Any);
            }
            Token::Literal(_) => panic!("Expected capture token"),
        }
    }

    #[test]
    fn test_tokenize_locale_prefix() {
        let pattern = compile("/:lang(en|fr)?/about");
        assert_eq!(pattern.keys(), ["lang"]);
        match &pattern.tokens()[0] {
            Token::Capture(capture) => {
                assert!(capture.optional);
                assert!(matches!(
                    &capture.constraint,
                    Constraint::Pattern { source, .. } if source == "en|fr"
                ));
            }
            Token::Literal(_) => panic!("Expected capture token"),
        }
        assert_eq!(pattern.tokens()[1], Token::Literal("/about".to_string()));
    }

    #[test]
    fn test_tokenize_modifiers() {
        let pattern = compile("/files/:path*/:rest+");
        let flags: Vec<(bool, bool)> = pattern
            .tokens()
            .iter()
            .filter_map(|token| match token {
                Token::Capture(c) => Some((c.optional, c.repeat)),
                Token::Literal(_) => None,
            })
            .collect();
        assert_eq!(flags, vec![(true, true), (false, true)]);
    }

    #[test]
    fn test_unnamed_groups_are_numbered() {
        let pattern = compile("/(\\d+)/:name/(edit|view)");
        assert_eq!(pattern.keys(), ["0", "name", "1"]);

        let params = pattern.matches("/12/foo/view").unwrap();
        assert_eq!(params.get_str("0"), Some("12"));
        assert_eq!(params.get_str("1"), Some("view"));
    }

    #[test]
    fn test_escaped_characters_are_literal() {
        let pattern = compile("/price\\:usd/\\(x\\)");
        assert!(pattern.keys().is_empty());
        assert!(pattern.matches("/price:usd/(x)").is_some());
    }

    #[rstest]
    #[case("/users/:id/:id")]
    #[case("/:lang(en|fr)?/:lang")]
    fn test_duplicate_capture_names_rejected(#[case] source: &str) {
        let error = RoutePattern::compile(source).unwrap_err();
        assert!(error.to_string().contains("duplicate capture name"));
    }

    #[rstest]
    #[case("/users/:id(\\d+")]
    #[case("/users/(")]
    #[case("/users)")]
    #[case("/users\\")]
    #[case("/users/:id([)")]
    fn test_malformed_patterns_rejected(#[case] source: &str) {
        assert!(matches!(
            RoutePattern::compile(source),
            Err(RouteError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_static_matching() {
        let pattern = compile("/users");

        assert!(pattern.matches("/users").is_some());
        assert!(pattern.matches("/posts").is_none());
        assert!(pattern.matches("/users/123").is_none());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let pattern = compile("/About");
        assert!(pattern.matches("/about").is_some());
        assert!(pattern.matches("/ABOUT").is_some());

        let pattern = compile("/:lang(en|fr)");
        assert_eq!(pattern.matches("/FR").unwrap().get_str("lang"), Some("FR"));
    }

    #[test]
    fn test_trailing_slash_is_optional() {
        let pattern = compile("/users");
        assert!(pattern.matches("/users/").is_some());
        assert!(pattern.matches("/users//").is_none());

        let pattern = compile("/users/");
        assert!(pattern.matches("/users").is_some());
        assert!(pattern.matches("/users/").is_some());
    }

    #[test]
    fn test_dynamic_matching() {
        let pattern = compile("/users/:id");

        let params = pattern.matches("/users/123").unwrap();
        assert_eq!(params.get_str("id"), Some("123"));

        assert!(pattern.matches("/users").is_none());
        assert!(pattern.matches("/users/123/posts").is_none());
    }

    #[test]
    fn test_optional_locale_segment() {
        let pattern = compile("/:lang(en|fr)?/about");

        let params = pattern.matches("/about").unwrap();
        assert!(params.is_empty());

        let params = pattern.matches("/fr/about").unwrap();
        assert_eq!(params.get_str("lang"), Some("fr"));

        assert!(pattern.matches("/de/about").is_none());
    }

    #[test]
    fn test_optional_segment_backtracks() {
        // "about" fails the constraint, so the capture is skipped
        let pattern = compile("/:lang(en|fr)?/:page");

        let params = pattern.matches("/about").unwrap();
        assert_eq!(params.get_str("page"), Some("about"));
        assert!(!params.contains("lang"));

        let params = pattern.matches("/en").unwrap();
        assert_eq!(params.get_str("page"), Some("en"));
    }

    #[test]
    fn test_root_pattern_with_locale() {
        let pattern = compile("/:lang(en|fr)?/");

        assert!(pattern.matches("/").unwrap().is_empty());
        assert_eq!(pattern.matches("/en").unwrap().get_str("lang"), Some("en"));
        assert_eq!(pattern.matches("/en/").unwrap().get_str("lang"), Some("en"));
        assert!(pattern.matches("/de").is_none());
    }

    #[test]
    fn test_empty_constraint_never_matches() {
        let pattern = compile("/:lang()?/home");
        assert!(pattern.matches("/home").is_some());
        assert!(pattern.matches("/en/home").is_none());
    }

    #[test]
    fn test_constrained_param_matching() {
        let pattern = compile("/users/:id(\\d+)");

        assert!(pattern.matches("/users/123").is_some());
        assert!(pattern.matches("/users/abc").is_none());
    }

    #[test]
    fn test_captured_values_are_decoded_once() {
        let pattern = compile("/search/:term");

        let params = pattern.matches("/search/hello%20world").unwrap();
        assert_eq!(params.get_str("term"), Some("hello world"));

        let params = pattern.matches("/search/100%2525").unwrap();
        assert_eq!(params.get_str("term"), Some("100%25"));

        let params = pattern.matches("/search/bad%E0%A4").unwrap();
        assert_eq!(params.get_str("term"), Some("bad%E0%A4"));
    }

    #[test]
    fn test_capture_inside_segment() {
        let pattern = compile("/files/:name.:ext");

        let params = pattern.matches("/files/report.pdf").unwrap();
        assert_eq!(params.get_str("name"), Some("report"));
        assert_eq!(params.get_str("ext"), Some("pdf"));

        let pattern = compile("/posts/:id-:slug");
        let params = pattern.matches("/posts/12-hello").unwrap();
        assert_eq!(params.get_str("id"), Some("12"));
        assert_eq!(params.get_str("slug"), Some("hello"));
    }

    #[test]
    fn test_constrained_capture_spans_segments() {
        let pattern = compile("/docs/:path(.*)");

        let params = pattern.matches("/docs/a/b").unwrap();
        assert_eq!(params.get_str("path"), Some("a/b"));
        assert!(pattern.matches("/docs").is_none());

        let path = pattern
            .generate(&Params::new().with("path", "guide/intro"))
            .unwrap();
        assert_eq!(path, "/docs/guide/intro");

        let pattern = compile("/:lang(en|fr)?/docs/:path(.*)/edit");
        let params = pattern.matches("/fr/docs/a/b/edit").unwrap();
        assert_eq!(params.get_str("lang"), Some("fr"));
        assert_eq!(params.get_str("path"), Some("a/b"));
    }

    #[test]
    fn test_repeat_matching() {
        let pattern = compile("/docs/:path+");

        let params = pattern.matches("/docs/guide/intro/setup").unwrap();
        assert_eq!(params.get_str("path"), Some("guide/intro/setup"));
        assert!(pattern.matches("/docs").is_none());

        let pattern = compile("/docs/:path*");
        assert!(pattern.matches("/docs").unwrap().is_empty());
        assert_eq!(
            pattern.matches("/docs/a/b").unwrap().get_str("path"),
            Some("a/b")
        );
    }

    #[test]
    fn test_repeat_followed_by_literal() {
        let pattern = compile("/docs/:path+/edit");
        let params = pattern.matches("/docs/a/b/edit").unwrap();
        assert_eq!(params.get_str("path"), Some("a/b"));
    }

    #[test]
    fn test_generate_simple() {
        let pattern = compile("/user/:id");
        let path = pattern.generate(&Params::new().with("id", "42")).unwrap();
        assert_eq!(path, "/user/42");
    }

    #[test]
    fn test_generate_skips_absent_optional() {
        let pattern = compile("/:lang(en|fr)?/user/:id");

        let path = pattern.generate(&Params::new().with("id", "42")).unwrap();
        assert_eq!(path, "/user/42");

        let path = pattern
            .generate(&Params::new().with("id", "42").with("lang", "fr"))
            .unwrap();
        assert_eq!(path, "/fr/user/42");
    }

    #[test]
    fn test_generate_root() {
        let pattern = compile("/:lang(en|fr)?/");
        assert_eq!(pattern.generate(&Params::new()).unwrap(), "/");

        let pattern = compile("/:lang(en|fr)?");
        assert_eq!(pattern.generate(&Params::new()).unwrap(), "");
    }

    #[test]
    fn test_generate_does_not_encode() {
        let pattern = compile("/search/:term");
        let path = pattern
            .generate(&Params::new().with("term", "a b"))
            .unwrap();
        assert_eq!(path, "/search/a b");
    }

    #[test]
    fn test_generate_repeat() {
        let pattern = compile("/docs/:path+");
        let path = pattern
            .generate(&Params::new().with("path", vec!["guide", "intro"]))
            .unwrap();
        assert_eq!(path, "/docs/guide/intro");

        let pattern = compile("/docs/:path*");
        let path = pattern
            .generate(&Params::new().with("path", Vec::<String>::new()))
            .unwrap();
        assert_eq!(path, "/docs");
    }

    #[rstest]
    #[case("/user/:id", Params::new())]
    #[case("/user/:id", Params::new().with("id", ParamValue::Null))]
    #[case("/user/:id", Params::new().with("id", vec!["1", "2"]))]
    #[case("/user/:id", Params::new().with("id", ""))]
    #[case("/user/:id", Params::new().with("id", "a/b"))]
    #[case("/user/:id(\\d+)", Params::new().with("id", "abc"))]
    #[case("/docs/:path+", Params::new().with("path", Vec::<String>::new()))]
    fn test_generate_errors(#[case] source: &str, #[case] params: Params) {
        let error = compile(source).generate(&params).unwrap_err();
        assert!(matches!(error, RouteError::Generation { .. }));
    }

    #[test]
    fn test_missing_parameter_message() {
        let error = compile("/user/:id").generate(&Params::new()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Cannot generate path for \"/user/:id\": missing required parameter \"id\""
        );
    }

    #[rstest]
    #[case("/user/:id", &[("id", "42")])]
    #[case("/:lang(en|fr)?/blog/:slug", &[("lang", "fr"), ("slug", "hello")])]
    #[case("/a/:x/b/:y?", &[("x", "1")])]
    #[case("/files/:name.:ext", &[("name", "report"), ("ext", "pdf")])]
    fn test_generate_then_match_round_trip(#[case] source: &str, #[case] values: &[(&str, &str)]) {
        let pattern = compile(source);
        let params: Params = values.iter().copied().collect();

        let path = pattern.generate(&params).unwrap();
        assert_eq!(pattern.matches(&path), Some(params));
    }
}
