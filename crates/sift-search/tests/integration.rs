//! Integration tests for sift-search.
//!
//! Exercises the full round trip: raw filter criteria through preparation
//! into rendered clauses, and raw aggregation payloads through resolution
//! into facets.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::sync::Arc;

use serde_json::json;
use sift_query::{
    FieldMatcher, FilterValue, KeywordPreparer, LowercasePreparer, NumericPreparer,
    PreparerRegistry,
};
use sift_search::{
    BooleanCodedResolver, CodedLabelResolver, FacetResolverRegistry, FilterCriterion, SearchLayer,
    TermBucket, parse_range_buckets, parse_term_buckets,
};

/// Builds a layer configured like a small product-search integration.
fn product_layer() -> SearchLayer {
    let mut preparers = PreparerRegistry::new();
    preparers
        .register(FieldMatcher::exact("title"), Arc::new(KeywordPreparer))
        .unwrap();
    preparers
        .register(
            FieldMatcher::pattern("*_keyword").unwrap(),
            Arc::new(LowercasePreparer),
        )
        .unwrap();
    preparers
        .register(
            FieldMatcher::pattern("*_keyword").unwrap(),
            Arc::new(KeywordPreparer),
        )
        .unwrap();
    preparers
        .register(FieldMatcher::exact("price"), Arc::new(NumericPreparer))
        .unwrap();

    let mut resolvers = FacetResolverRegistry::new();
    resolvers
        .register(Arc::new(BooleanCodedResolver::new(&["in_stock"], &["1"])))
        .unwrap();
    resolvers
        .register(Arc::new(
            CodedLabelResolver::new(&["condition"])
                .with_label("N", "New")
                .with_localized_label("de", "N", "Neu"),
        ))
        .unwrap();

    SearchLayer::new(preparers, resolvers)
}

/// The engine's unescape rule: a backslash makes the next character
/// literal.
fn engine_unescape(input: &str) -> String {
    let mut unescaped = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                unescaped.push(next);
            }
        } else {
            unescaped.push(ch);
        }
    }

    unescaped
}

#[test]
fn test_keyword_value_round_trips_through_engine_unescape() {
    let layer = product_layer();
    let original = "he said \"hi\"";

    let clause = layer
        .clause(FilterCriterion::phrase(
            "title",
            FilterValue::text(original),
        ))
        .unwrap();

    // The rendered clause wraps the prepared value in phrase quotes.
    let rendered = clause.render();
    let inner = rendered
        .strip_prefix("title:\"")
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap();

    assert_eq!(engine_unescape(inner), original);
}

#[test]
fn test_boolean_aggregation_resolves_to_labeled_facets() {
    let layer = product_layer();

    let payload = json!([
        {"key": "1", "count": 42, "number": 1.0},
        {"key": "0", "count": 8, "number": 0.0},
    ]);
    let buckets = parse_term_buckets(&payload).unwrap();

    let facets = layer.facets("in_stock", &buckets, "en");
    assert_eq!(facets.len(), 2);
    assert_eq!(facets[0].value(), "true");
    assert_eq!(facets[0].count(), 42);
    assert_eq!(facets[1].value(), "false");
    assert_eq!(facets[1].count(), 8);
}

#[test]
fn test_unregistered_field_keeps_raw_bucket_values() {
    let layer = product_layer();
    let buckets = vec![TermBucket::new("acme", 12), TermBucket::new("zenith", 7)];

    let facets = layer.facets("brand", &buckets, "en");
    assert_eq!(facets[0].value(), "acme");
    assert_eq!(facets[1].value(), "zenith");
}

#[test]
fn test_locale_changes_presentation_only() {
    let layer = product_layer();
    let buckets = vec![TermBucket::new("N", 4)];

    let english = layer.facets("condition", &buckets, "en");
    let german = layer.facets("condition", &buckets, "de");

    assert_eq!(english[0].value(), "New");
    assert_eq!(german[0].value(), "Neu");
    assert_eq!(english[0].count(), german[0].count());
}

#[test]
fn test_range_aggregation_keeps_open_bounds_null() {
    let layer = product_layer();

    let payload = json!([
        {"to": "100", "count": 5},
        {"from": "100", "to": "200", "count": 3},
        {"from": "200", "count": 1},
    ]);
    let buckets = parse_range_buckets(&payload).unwrap();

    let facets = layer.range_facets("price", &buckets);
    assert_eq!(facets.len(), 3);
    assert_eq!(facets[0].from(), None);
    assert_eq!(facets[0].to(), Some("100"));
    assert_eq!(facets[2].from(), Some("200"));
    assert_eq!(facets[2].to(), None);
}

#[test]
fn test_keyword_chain_lowercases_then_escapes() {
    let layer = product_layer();

    let clause = layer
        .clause(FilterCriterion::term(
            "brand_keyword",
            FilterValue::text("ACME+"),
        ))
        .unwrap();

    assert_eq!(clause.render(), "brand_keyword:acme\\+");
}

#[test]
fn test_numeric_field_accepts_text_and_rejects_garbage() {
    let layer = product_layer();

    let clause = layer
        .clause(FilterCriterion::range(
            "price",
            Some(FilterValue::text("10")),
            None,
        ))
        .unwrap();
    assert_eq!(clause.render(), "price:[10 TO *]");

    let err = layer.clause(FilterCriterion::term(
        "price",
        FilterValue::text("cheap"),
    ));
    assert!(err.is_err());
}
