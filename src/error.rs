//! Error handling for the route registry
//!
//! Every failure here is a caller-input problem: a malformed pattern, a
//! route with nothing to render, a duplicate name, or a path that cannot be
//! generated from the parameters supplied. Matching never fails; a path that
//! no route accepts is reported as a miss, not as an error.

use thiserror::Error;

/// Result alias used throughout the crate
pub type RouteResult<T> = Result<T, RouteError>;

/// Errors raised while registering routes or generating URLs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The route has neither a name nor a page to render
    #[error("Missing page to render for route \"{pattern}\"")]
    Configuration { pattern: String },

    /// A route with the same name is already registered
    #[error("Route \"{name}\" already exists")]
    DuplicateRoute { name: String },

    /// The path pattern could not be compiled
    #[error("Invalid route pattern \"{pattern}\": {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A concrete path could not be generated from the given parameters
    #[error("Cannot generate path for \"{pattern}\": {reason}")]
    Generation { pattern: String, reason: String },
}

impl RouteError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn generation(pattern: &str, reason: impl Into<String>) -> Self {
        RouteError::Generation {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error was raised while registering a route
    pub fn is_registration_error(&self) -> bool {
        matches!(
            self,
            RouteError::Configuration { .. }
                | RouteError::DuplicateRoute { .. }
                | RouteError::InvalidPattern { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_route_display() {
        let error = RouteError::DuplicateRoute {
            name: "about".to_string(),
        };
        assert_eq!(error.to_string(), "Route \"about\" already exists");
    }

    #[test]
    fn test_configuration_display() {
        let error = RouteError::Configuration {
            pattern: "/blog".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Missing page to render for route \"/blog\""
        );
    }

    #[test]
    fn test_generation_display() {
        let error = RouteError::generation("/user/:id", "missing parameter \"id\"");
        assert_eq!(
            error.to_string(),
            "Cannot generate path for \"/user/:id\": missing parameter \"id\""
        );
    }

    #[test]
    fn test_registration_classification() {
        assert!(RouteError::invalid_pattern("/(", "unclosed group").is_registration_error());
        assert!(RouteError::DuplicateRoute {
            name: "x".to_string()
        }
        .is_registration_error());
        assert!(!RouteError::generation("/x", "boom").is_registration_error());
    }
}
