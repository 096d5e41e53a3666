//! Field-keyed preparer chains.

use std::sync::Arc;

use crate::{
    FieldMatcher, FilterValue, PrepareContext, PrepareError, RegistryError, ValuePreparer,
};

/// One registered matcher/preparer pair.
struct Registration {
    /// The fields this entry applies to.
    matcher: FieldMatcher,
    /// The preparer to run.
    preparer: Arc<dyn ValuePreparer>,
}

/// Maps field names to ordered chains of [`ValuePreparer`]s.
///
/// Registration order is the chain order: the first registered preparer
/// whose matcher selects a field runs first. When several matchers select
/// the same field, their preparers concatenate, still in registration
/// order. The registry is populated once during setup and read-only
/// afterwards.
#[derive(Default)]
pub struct PreparerRegistry {
    /// Registered entries in registration order.
    entries: Vec<Registration>,
}

impl PreparerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a preparer for the fields selected by `matcher`.
    ///
    /// Registering a preparer name under an equal matcher twice is a
    /// configuration error: the second registration would redefine the
    /// chain rather than extend it.
    pub fn register(
        &mut self,
        matcher: FieldMatcher,
        preparer: Arc<dyn ValuePreparer>,
    ) -> Result<(), RegistryError> {
        let duplicate = self.entries.iter().any(|entry| {
            entry.matcher.same_selection(&matcher) && entry.preparer.name() == preparer.name()
        });
        if duplicate {
            return Err(RegistryError::DuplicatePreparer {
                name: preparer.name().to_string(),
                matcher: matcher.to_string(),
            });
        }

        self.entries.push(Registration { matcher, preparer });
        Ok(())
    }

    /// Returns the preparer chain for `field`, in registration order.
    pub fn chain_for(&self, field: &str) -> Vec<Arc<dyn ValuePreparer>> {
        self.entries
            .iter()
            .filter(|entry| entry.matcher.matches(field))
            .map(|entry| Arc::clone(&entry.preparer))
            .collect()
    }

    /// Runs the chain for `field` over `value` and returns the prepared
    /// value.
    ///
    /// A field with no registered preparers passes its value through
    /// unchanged.
    pub fn prepare(&self, field: &str, value: FilterValue) -> Result<FilterValue, PrepareError> {
        let mut ctx = PrepareContext::new(field, value);

        for entry in &self.entries {
            if entry.matcher.matches(field) {
                entry.preparer.prepare(&mut ctx)?;
            }
        }

        Ok(ctx.into_value())
    }
}
