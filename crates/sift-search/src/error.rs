//! Error types for clause compilation and facet resolution.

use thiserror::Error;

/// Errors raised while compiling a filter criterion into a clause.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClauseError {
    /// Value preparation failed.
    #[error(transparent)]
    Prepare(#[from] sift_query::PrepareError),

    /// A range criterion had no bounds at all.
    #[error("range criterion for field '{field}' has neither bound")]
    EmptyRange {
        /// The field the criterion targeted.
        field: String,
    },
}

/// Errors raised while constructing facet values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FacetError {
    /// A range facet with both ends open carries no information.
    #[error("range facet has neither bound")]
    EmptyRange,

    /// Range facet bounds are inverted.
    #[error("range facet bounds are inverted: '{from}' > '{to}'")]
    InvertedBounds {
        /// The lower bound.
        from: String,
        /// The upper bound.
        to: String,
    },
}

/// Error a facet resolver may raise for input it cannot interpret.
///
/// The registry catches this at the dispatch boundary and degrades to
/// identity resolution for the affected bucket, so a resolver failure is
/// never fatal to the overall facet result set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot resolve facet value '{value}': {reason}")]
pub struct ResolveError {
    /// The raw bucket key that failed to resolve.
    pub value: String,
    /// Why resolution failed.
    pub reason: String,
}

impl ResolveError {
    /// Creates a resolve error for a raw bucket key.
    pub fn new(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Registration-time configuration errors for the resolver registry.
///
/// Fatal to startup, never raised per-request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolverRegistryError {
    /// Two resolvers with the same name were registered.
    #[error("facet resolver '{name}' is already registered")]
    DuplicateResolver {
        /// Name of the resolver.
        name: String,
    },
}

/// Errors raised while reading an aggregation response payload.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The payload did not match the expected bucket shape.
    #[error("malformed aggregation response: {source}")]
    Malformed {
        /// Underlying deserialization error.
        source: serde_json::Error,
    },
}
