//! Aggregation-response adaptation.
//!
//! The engine reports aggregations as JSON bucket lists. This module
//! deserializes those payloads and feeds each bucket through the resolver
//! registry, producing the typed facets handed to the application.

use serde::Deserialize;
use tracing::warn;

use crate::{Facet, FacetResolverRegistry, RangeFacet, ResponseError};

/// One discrete aggregation bucket as reported by the engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TermBucket {
    /// Raw bucket key.
    pub key: String,
    /// Number of matching documents.
    pub count: u64,
    /// Parallel numeric form of the key, when the engine reported one.
    #[serde(default)]
    pub number: Option<f64>,
}

impl TermBucket {
    /// Creates a bucket from a raw key and count.
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
            number: None,
        }
    }

    /// Attaches the engine's numeric form of the key.
    pub fn with_number(mut self, number: f64) -> Self {
        self.number = Some(number);
        self
    }
}

/// One interval aggregation bucket as reported by the engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RangeBucket {
    /// Lower boundary key, absent when the interval is open below.
    #[serde(default)]
    pub from: Option<String>,
    /// Upper boundary key, absent when the interval is open above.
    #[serde(default)]
    pub to: Option<String>,
    /// Number of matching documents.
    pub count: u64,
}

/// Parses the engine's discrete aggregation payload for one field.
pub fn parse_term_buckets(payload: &serde_json::Value) -> Result<Vec<TermBucket>, ResponseError> {
    serde_json::from_value(payload.clone()).map_err(|source| ResponseError::Malformed { source })
}

/// Parses the engine's interval aggregation payload for one field.
pub fn parse_range_buckets(payload: &serde_json::Value) -> Result<Vec<RangeBucket>, ResponseError> {
    serde_json::from_value(payload.clone()).map_err(|source| ResponseError::Malformed { source })
}

/// Resolves discrete buckets into facets.
///
/// Bucket order and counts are preserved exactly; only the display value
/// changes, and only for fields a resolver claims.
pub fn resolve_term_buckets(
    registry: &FacetResolverRegistry,
    field: &str,
    buckets: &[TermBucket],
    locale: &str,
) -> Vec<Facet> {
    buckets
        .iter()
        .map(|bucket| {
            let value = registry.resolve(field, &bucket.key, bucket.number, locale);
            Facet::new(value, bucket.count)
        })
        .collect()
}

/// Assembles interval buckets into range facets.
///
/// A bucket that cannot form a valid range facet (both boundaries missing,
/// or inverted bounds) is skipped with a warning; one bad bucket never
/// aborts the remaining facets.
pub fn resolve_range_buckets(field: &str, buckets: &[RangeBucket]) -> Vec<RangeFacet> {
    buckets
        .iter()
        .filter_map(|bucket| {
            match RangeFacet::new(bucket.from.clone(), bucket.to.clone(), bucket.count) {
                Ok(facet) => Some(facet),
                Err(error) => {
                    warn!(field, %error, "skipping malformed range bucket");
                    None
                }
            }
        })
        .collect()
}
