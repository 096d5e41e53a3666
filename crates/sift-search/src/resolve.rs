//! Facet resolvers and their dispatch registry.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use tracing::warn;

use crate::{ResolveError, ResolverRegistryError};

/// A pluggable transform from a raw aggregation bucket key to the facet
/// value shown to the application.
///
/// Implementations are stateless strategies registered once at startup and
/// shared read-only across concurrent requests. `locale` affects
/// presentation only, never the equality semantics of the resolved value.
pub trait FacetResolver: Send + Sync {
    /// Stable name used for diagnostics and duplicate detection.
    ///
    /// Two registrations of the same resolver type need distinct names;
    /// the built-in resolvers offer a `named` builder for that.
    fn name(&self) -> &str;

    /// Returns true if this resolver handles buckets of `field`.
    fn is_responsible(&self, field: &str) -> bool;

    /// Resolves a raw bucket key into a display value.
    ///
    /// `number` is a parallel numeric form of the key, supplied when the
    /// engine reported the bucket key numerically; it lets implementations
    /// branch on representation without re-parsing. Well-formed but
    /// unexpected keys must take a defined default branch rather than
    /// error.
    fn resolve(
        &self,
        value: &str,
        number: Option<f64>,
        locale: &str,
    ) -> Result<String, ResolveError>;
}

/// Maps coded boolean values to positive/negative labels.
///
/// The truthy code set is enumerated explicitly; any other key maps to the
/// negative label. This is the template for closed code sets: enumerate
/// what is true, default to false.
pub struct BooleanCodedResolver {
    /// Registry name for this instance.
    name: String,
    /// Fields this resolver is responsible for.
    fields: HashSet<String>,
    /// Keys that resolve to the positive label.
    truthy: HashSet<String>,
    /// Locale-specific (positive, negative) label pairs.
    labels: HashMap<String, (String, String)>,
}

impl BooleanCodedResolver {
    /// Positive label used when no locale-specific pair is registered.
    const TRUE_LABEL: &'static str = "true";
    /// Negative label used when no locale-specific pair is registered.
    const FALSE_LABEL: &'static str = "false";

    /// Creates a resolver for `fields` with the given truthy code set.
    pub fn new(fields: &[&str], truthy: &[&str]) -> Self {
        Self {
            name: "boolean-coded".to_string(),
            fields: fields.iter().map(|field| (*field).to_string()).collect(),
            truthy: truthy.iter().map(|code| (*code).to_string()).collect(),
            labels: HashMap::new(),
        }
    }

    /// Overrides the registry name, allowing several instances to coexist.
    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Adds locale-specific positive/negative labels.
    pub fn with_labels(mut self, locale: &str, positive: &str, negative: &str) -> Self {
        self.labels.insert(
            locale.to_string(),
            (positive.to_string(), negative.to_string()),
        );
        self
    }
}

impl FacetResolver for BooleanCodedResolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_responsible(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    fn resolve(
        &self,
        value: &str,
        number: Option<f64>,
        locale: &str,
    ) -> Result<String, ResolveError> {
        // Integral numeric keys canonicalize to their integer form, so a
        // bucket the engine reports as 1.0 matches the code "1".
        let key = match number {
            Some(n) if n.fract() == 0.0 && n.is_finite() => format!("{}", n as i64),
            _ => value.to_string(),
        };

        let truthy = self.truthy.contains(&key);
        let label = match self.labels.get(locale) {
            Some((positive, negative)) => {
                if truthy {
                    positive.clone()
                } else {
                    negative.clone()
                }
            }
            None => {
                if truthy {
                    Self::TRUE_LABEL.to_string()
                } else {
                    Self::FALSE_LABEL.to_string()
                }
            }
        };

        Ok(label)
    }
}

/// Maps closed code sets to human-readable labels.
///
/// Label lookup falls back in steps: locale-specific label, then the
/// code's default label, then the code itself. An unknown code is not an
/// error.
pub struct CodedLabelResolver {
    /// Registry name for this instance.
    name: String,
    /// Fields this resolver is responsible for.
    fields: HashSet<String>,
    /// Default label per code.
    defaults: HashMap<String, String>,
    /// Locale-specific label per (locale, code).
    localized: HashMap<(String, String), String>,
}

impl CodedLabelResolver {
    /// Creates a resolver for `fields` with no labels yet.
    pub fn new(fields: &[&str]) -> Self {
        Self {
            name: "coded-label".to_string(),
            fields: fields.iter().map(|field| (*field).to_string()).collect(),
            defaults: HashMap::new(),
            localized: HashMap::new(),
        }
    }

    /// Overrides the registry name, allowing several instances to coexist.
    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Adds a default label for a code.
    pub fn with_label(mut self, code: &str, label: &str) -> Self {
        self.defaults.insert(code.to_string(), label.to_string());
        self
    }

    /// Adds a locale-specific label for a code.
    pub fn with_localized_label(mut self, locale: &str, code: &str, label: &str) -> Self {
        self.localized
            .insert((locale.to_string(), code.to_string()), label.to_string());
        self
    }
}

impl FacetResolver for CodedLabelResolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_responsible(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    fn resolve(
        &self,
        value: &str,
        _number: Option<f64>,
        locale: &str,
    ) -> Result<String, ResolveError> {
        let key = (locale.to_string(), value.to_string());
        let label = self
            .localized
            .get(&key)
            .or_else(|| self.defaults.get(value))
            .cloned()
            .unwrap_or_else(|| value.to_string());
        Ok(label)
    }
}

/// Dispatches raw bucket keys to the first responsible resolver.
///
/// Registration order is the dispatch order. A field no resolver claims
/// resolves to the raw key unchanged; a resolver error degrades to the
/// same identity resolution for that single bucket, logged, never
/// propagated.
#[derive(Default)]
pub struct FacetResolverRegistry {
    /// Registered resolvers in registration order.
    resolvers: Vec<Arc<dyn FacetResolver>>,
}

impl FacetResolverRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resolver.
    ///
    /// Duplicate resolver names are a configuration error: the second
    /// registration could only shadow or be shadowed by the first, and
    /// either way the misconfiguration would otherwise go unnoticed.
    pub fn register(
        &mut self,
        resolver: Arc<dyn FacetResolver>,
    ) -> Result<(), ResolverRegistryError> {
        if self
            .resolvers
            .iter()
            .any(|registered| registered.name() == resolver.name())
        {
            return Err(ResolverRegistryError::DuplicateResolver {
                name: resolver.name().to_string(),
            });
        }

        self.resolvers.push(resolver);
        Ok(())
    }

    /// Resolves one bucket key for `field` into its display value.
    pub fn resolve(&self, field: &str, value: &str, number: Option<f64>, locale: &str) -> String {
        let Some(resolver) = self
            .resolvers
            .iter()
            .find(|resolver| resolver.is_responsible(field))
        else {
            return value.to_string();
        };

        match resolver.resolve(value, number, locale) {
            Ok(resolved) => resolved,
            Err(error) => {
                warn!(
                    resolver = resolver.name(),
                    field,
                    value,
                    %error,
                    "facet resolution failed, falling back to raw value"
                );
                value.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Resolver that always fails, for exercising the degradation path.
    struct FailingResolver;

    impl FacetResolver for FailingResolver {
        fn name(&self) -> &str {
            "failing"
        }

        fn is_responsible(&self, field: &str) -> bool {
            field == "broken"
        }

        fn resolve(
            &self,
            value: &str,
            _number: Option<f64>,
            _locale: &str,
        ) -> Result<String, ResolveError> {
            Err(ResolveError::new(value, "always fails"))
        }
    }

    #[test]
    fn boolean_truthy_code_resolves_positive() {
        let resolver = BooleanCodedResolver::new(&["in_stock"], &["1"]);
        assert_eq!(resolver.resolve("1", Some(1.0), "en").unwrap(), "true");
    }

    #[test]
    fn boolean_falsy_code_resolves_negative() {
        let resolver = BooleanCodedResolver::new(&["in_stock"], &["1"]);
        assert_eq!(resolver.resolve("0", Some(0.0), "en").unwrap(), "false");
    }

    #[test]
    fn boolean_unknown_value_resolves_negative() {
        let resolver = BooleanCodedResolver::new(&["in_stock"], &["1"]);
        assert_eq!(
            resolver.resolve("anything-else", None, "en").unwrap(),
            "false"
        );
    }

    #[test]
    fn boolean_integral_number_canonicalizes() {
        // The engine may report the key as "1.0" with number 1.0; the
        // numeric form matches the code "1".
        let resolver = BooleanCodedResolver::new(&["in_stock"], &["1"]);
        assert_eq!(resolver.resolve("1.0", Some(1.0), "en").unwrap(), "true");
    }

    #[test]
    fn boolean_locale_labels_apply() {
        let resolver =
            BooleanCodedResolver::new(&["in_stock"], &["1"]).with_labels("de", "ja", "nein");
        assert_eq!(resolver.resolve("1", Some(1.0), "de").unwrap(), "ja");
        assert_eq!(resolver.resolve("0", Some(0.0), "de").unwrap(), "nein");
        // Unregistered locale falls back to the default labels.
        assert_eq!(resolver.resolve("1", Some(1.0), "fr").unwrap(), "true");
    }

    #[test]
    fn boolean_responsibility_is_field_scoped() {
        let resolver = BooleanCodedResolver::new(&["in_stock"], &["1"]);
        assert!(resolver.is_responsible("in_stock"));
        assert!(!resolver.is_responsible("brand"));
    }

    #[test]
    fn coded_label_resolves_known_code() {
        let resolver = CodedLabelResolver::new(&["condition"])
            .with_label("N", "New")
            .with_label("U", "Used");
        assert_eq!(resolver.resolve("N", None, "en").unwrap(), "New");
    }

    #[test]
    fn coded_label_prefers_locale() {
        let resolver = CodedLabelResolver::new(&["condition"])
            .with_label("N", "New")
            .with_localized_label("de", "N", "Neu");
        assert_eq!(resolver.resolve("N", None, "de").unwrap(), "Neu");
        assert_eq!(resolver.resolve("N", None, "en").unwrap(), "New");
    }

    #[test]
    fn coded_label_unknown_code_is_identity() {
        let resolver = CodedLabelResolver::new(&["condition"]).with_label("N", "New");
        assert_eq!(resolver.resolve("X", None, "en").unwrap(), "X");
    }

    #[test]
    fn registry_dispatches_to_responsible_resolver() {
        let mut registry = FacetResolverRegistry::new();
        registry
            .register(Arc::new(BooleanCodedResolver::new(&["in_stock"], &["1"])))
            .unwrap();

        assert_eq!(registry.resolve("in_stock", "1", Some(1.0), "en"), "true");
    }

    #[test]
    fn registry_identity_for_unclaimed_field() {
        let mut registry = FacetResolverRegistry::new();
        registry
            .register(Arc::new(BooleanCodedResolver::new(&["in_stock"], &["1"])))
            .unwrap();

        assert_eq!(registry.resolve("brand", "acme", None, "en"), "acme");
    }

    #[test]
    fn registry_identity_when_empty() {
        let registry = FacetResolverRegistry::new();
        assert_eq!(registry.resolve("brand", "acme", None, "en"), "acme");
    }

    #[test]
    fn registry_first_responsible_wins() {
        let mut registry = FacetResolverRegistry::new();
        registry
            .register(Arc::new(
                CodedLabelResolver::new(&["condition"]).with_label("N", "New"),
            ))
            .unwrap();
        registry
            .register(Arc::new(BooleanCodedResolver::new(&["condition"], &["N"])))
            .unwrap();

        // The label resolver registered first, so the boolean resolver
        // never sees the field.
        assert_eq!(registry.resolve("condition", "N", None, "en"), "New");
    }

    #[test]
    fn registry_degrades_to_identity_on_resolver_error() {
        let mut registry = FacetResolverRegistry::new();
        registry.register(Arc::new(FailingResolver)).unwrap();

        assert_eq!(registry.resolve("broken", "raw-key", None, "en"), "raw-key");
    }

    #[test]
    fn duplicate_resolver_name_is_config_error() {
        let mut registry = FacetResolverRegistry::new();
        registry
            .register(Arc::new(BooleanCodedResolver::new(&["a"], &["1"])))
            .unwrap();

        let err = registry
            .register(Arc::new(BooleanCodedResolver::new(&["b"], &["1"])))
            .unwrap_err();
        assert_eq!(
            err,
            ResolverRegistryError::DuplicateResolver {
                name: "boolean-coded".to_string(),
            }
        );
    }

    #[test]
    fn named_instances_can_coexist() {
        let mut registry = FacetResolverRegistry::new();
        registry
            .register(Arc::new(BooleanCodedResolver::new(&["a"], &["1"])))
            .unwrap();
        registry
            .register(Arc::new(
                BooleanCodedResolver::new(&["b"], &["Y"]).named("boolean-coded-b"),
            ))
            .unwrap();

        assert_eq!(registry.resolve("a", "1", Some(1.0), "en"), "true");
        assert_eq!(registry.resolve("b", "Y", None, "en"), "true");
    }
}
