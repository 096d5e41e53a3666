//! Mutable carrier for a value moving through a preparer chain.

use crate::FilterValue;

/// Carries a single filter value through a chain of preparers.
///
/// One context is created per pipeline invocation and owned exclusively by
/// it. Preparers read and overwrite the value slot in turn; the variant may
/// change along the way, but the context never holds more than one logical
/// value. The field name is fixed for the lifetime of the context and used
/// for diagnostics.
#[derive(Debug)]
pub struct PrepareContext {
    /// The field the value is destined for.
    field: String,
    /// The value slot; the variant may change across preparers.
    value: FilterValue,
}

impl PrepareContext {
    /// Creates a context for one field/value pair.
    pub fn new(field: impl Into<String>, value: FilterValue) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }

    /// Returns the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the current value.
    pub fn value(&self) -> &FilterValue {
        &self.value
    }

    /// Replaces the current value.
    pub fn set_value(&mut self, value: FilterValue) {
        self.value = value;
    }

    /// Consumes the context, returning the prepared value.
    pub fn into_value(self) -> FilterValue {
        self.value
    }
}
