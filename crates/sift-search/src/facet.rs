//! Facet result types.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::FacetError;

/// A summarized count of documents sharing one value of a field.
///
/// The value is the display form produced by facet resolution; the count is
/// the number of matching documents within the current query scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    /// Display value for the bucket.
    value: String,
    /// Number of matching documents.
    count: u64,
}

impl Facet {
    /// Creates a facet from a resolved display value and document count.
    pub fn new(value: impl Into<String>, count: u64) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }

    /// Returns the display value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the document count.
    pub fn count(&self) -> u64 {
        self.count
    }
}

/// A facet whose grouping key is an interval rather than a discrete value.
///
/// `None` is the only representation of an open end; a sentinel value is
/// never substituted, so downstream consumers can distinguish "unbounded"
/// from any real boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeFacet {
    /// Lower boundary, `None` when the interval is open below.
    from: Option<String>,
    /// Upper boundary, `None` when the interval is open above.
    to: Option<String>,
    /// Number of matching documents within the interval.
    count: u64,
}

impl RangeFacet {
    /// Creates a range facet, validating the interval.
    ///
    /// An interval open at both ends carries no information and is
    /// rejected. When both bounds are present they must satisfy
    /// `from <= to`: bounds that both parse as finite numbers compare
    /// numerically, anything else compares by byte order.
    pub fn new(from: Option<String>, to: Option<String>, count: u64) -> Result<Self, FacetError> {
        match (&from, &to) {
            (None, None) => return Err(FacetError::EmptyRange),
            (Some(lower), Some(upper)) => {
                if bound_ordering(lower, upper) == Ordering::Greater {
                    return Err(FacetError::InvertedBounds {
                        from: lower.clone(),
                        to: upper.clone(),
                    });
                }
            }
            (None, Some(_)) | (Some(_), None) => {}
        }

        Ok(Self { from, to, count })
    }

    /// Returns the lower boundary, `None` when unbounded below.
    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    /// Returns the upper boundary, `None` when unbounded above.
    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    /// Returns the document count.
    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Orders two boundary keys in the field's natural ordering.
///
/// Keys that both parse as finite numbers compare numerically; everything
/// else falls back to byte order, which orders ISO-style date keys
/// correctly.
fn bound_ordering(lower: &str, upper: &str) -> Ordering {
    if let (Ok(a), Ok(b)) = (lower.parse::<f64>(), upper.parse::<f64>()) {
        if a.is_finite() && b.is_finite() {
            if let Some(ordering) = a.partial_cmp(&b) {
                return ordering;
            }
        }
    }
    lower.cmp(upper)
}
