//! Field matchers for preparer registration.

use std::fmt;

use globset::{Glob, GlobMatcher};

use crate::RegistryError;

/// Selects the fields a registered preparer applies to.
///
/// A matcher is either an exact field name or a glob pattern. Patterns are
/// compiled once at registration time; an invalid pattern is a
/// configuration error and fatal to startup.
#[derive(Debug, Clone)]
pub enum FieldMatcher {
    /// Matches exactly one field name.
    Exact(String),
    /// Matches any field name the compiled glob accepts.
    Pattern(GlobMatcher),
}

impl FieldMatcher {
    /// Creates a matcher for exactly one field name.
    pub fn exact(name: impl Into<String>) -> Self {
        Self::Exact(name.into())
    }

    /// Compiles a glob pattern into a matcher.
    pub fn pattern(pattern: &str) -> Result<Self, RegistryError> {
        let glob = Glob::new(pattern).map_err(|source| RegistryError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::Pattern(glob.compile_matcher()))
    }

    /// Returns true if this matcher selects `field`.
    pub fn matches(&self, field: &str) -> bool {
        match self {
            Self::Exact(name) => name == field,
            Self::Pattern(matcher) => matcher.is_match(field),
        }
    }

    /// Returns true if two matchers select provably identical field sets.
    ///
    /// Used for duplicate detection at registration time: exact matchers
    /// compare by name, patterns by their glob source.
    pub(crate) fn same_selection(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.glob() == b.glob(),
            (Self::Exact(_), Self::Pattern(_)) | (Self::Pattern(_), Self::Exact(_)) => false,
        }
    }
}

impl fmt::Display for FieldMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(name) => write!(f, "{name}"),
            Self::Pattern(matcher) => write!(f, "{}", matcher.glob().glob()),
        }
    }
}
