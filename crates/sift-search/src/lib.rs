//! Engine clause compilation and facet resolution for sift.
//!
//! This crate is the engine-facing half of the sift search layer. On the
//! way into the engine, it compiles application filter criteria into
//! engine-native filter clauses, running every value through the
//! `sift-query` preparation pipeline first. On the way back, it translates
//! raw aggregation buckets from the engine's response into typed [`Facet`]
//! and [`RangeFacet`] values through pluggable [`FacetResolver`]s.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use sift_query::{FieldMatcher, FilterValue, KeywordPreparer, PreparerRegistry};
//! use sift_search::{
//!     BooleanCodedResolver, FacetResolverRegistry, FilterCriterion, SearchLayer, TermBucket,
//! };
//!
//! let mut preparers = PreparerRegistry::new();
//! preparers
//!     .register(FieldMatcher::exact("title"), Arc::new(KeywordPreparer))
//!     .unwrap();
//!
//! let mut resolvers = FacetResolverRegistry::new();
//! resolvers
//!     .register(Arc::new(BooleanCodedResolver::new(&["in_stock"], &["1"])))
//!     .unwrap();
//!
//! let layer = SearchLayer::new(preparers, resolvers);
//!
//! let clause = layer
//!     .clause(FilterCriterion::phrase("title", FilterValue::text("a \"b\"")))
//!     .unwrap();
//! assert_eq!(clause.render(), "title:\"a \\\"b\\\"\"");
//!
//! let buckets = vec![TermBucket::new("1", 42), TermBucket::new("0", 8)];
//! let facets = layer.facets("in_stock", &buckets, "en");
//! assert_eq!(facets[0].value(), "true");
//! ```

#![warn(missing_docs)]

mod clause;
mod error;
mod facet;
mod layer;
mod resolve;
mod response;

pub use clause::{ClauseCompiler, FilterClause, FilterCriterion};
pub use error::{ClauseError, FacetError, ResolveError, ResolverRegistryError, ResponseError};
pub use facet::{Facet, RangeFacet};
pub use layer::SearchLayer;
pub use resolve::{BooleanCodedResolver, CodedLabelResolver, FacetResolver, FacetResolverRegistry};
pub use response::{
    RangeBucket, TermBucket, parse_range_buckets, parse_term_buckets, resolve_range_buckets,
    resolve_term_buckets,
};
