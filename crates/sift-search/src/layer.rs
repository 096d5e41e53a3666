//! The application-facing search layer.

use sift_query::PreparerRegistry;

use crate::{
    ClauseCompiler, ClauseError, Facet, FacetResolverRegistry, FilterClause, FilterCriterion,
    RangeBucket, RangeFacet, TermBucket, resolve_range_buckets, resolve_term_buckets,
};

/// Owns the preparer and resolver registries for one search integration.
///
/// Both registries are populated during setup and read-only afterwards, so
/// one layer is safely shared across arbitrarily many concurrent requests.
/// Filter criteria flow through [`SearchLayer::clause`] on the way into the
/// engine; aggregation buckets flow through [`SearchLayer::facets`] and
/// [`SearchLayer::range_facets`] on the way back.
#[derive(Default)]
pub struct SearchLayer {
    /// Preparer chains applied on the way into the engine.
    preparers: PreparerRegistry,
    /// Resolvers applied to aggregation buckets on the way back.
    resolvers: FacetResolverRegistry,
}

impl SearchLayer {
    /// Creates a layer from populated registries.
    pub fn new(preparers: PreparerRegistry, resolvers: FacetResolverRegistry) -> Self {
        Self {
            preparers,
            resolvers,
        }
    }

    /// Returns the preparer registry.
    pub fn preparers(&self) -> &PreparerRegistry {
        &self.preparers
    }

    /// Returns the resolver registry.
    pub fn resolvers(&self) -> &FacetResolverRegistry {
        &self.resolvers
    }

    /// Compiles a filter criterion into an engine clause.
    pub fn clause(&self, criterion: FilterCriterion) -> Result<FilterClause, ClauseError> {
        ClauseCompiler::new(&self.preparers).compile(criterion)
    }

    /// Resolves discrete aggregation buckets for `field` into facets.
    pub fn facets(&self, field: &str, buckets: &[TermBucket], locale: &str) -> Vec<Facet> {
        resolve_term_buckets(&self.resolvers, field, buckets, locale)
    }

    /// Assembles interval aggregation buckets for `field` into range facets.
    pub fn range_facets(&self, field: &str, buckets: &[RangeBucket]) -> Vec<RangeFacet> {
        resolve_range_buckets(field, buckets)
    }
}
