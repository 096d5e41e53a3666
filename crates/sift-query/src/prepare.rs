//! Pluggable per-field value transforms.

use crate::{FilterValue, PrepareContext, PrepareError, escape::escape_phrase_chars};

/// A pluggable transform applied to a raw filter value before it becomes
/// part of an engine query clause.
///
/// Implementations are stateless strategies: registered once at startup,
/// shared read-only across arbitrarily many concurrent requests, never
/// mutated. Mutable instance state in an implementation is a correctness
/// bug, not an optimization opportunity.
pub trait ValuePreparer: Send + Sync {
    /// Stable name used for diagnostics and duplicate detection.
    fn name(&self) -> &'static str;

    /// Reads and possibly overwrites the value in `ctx`.
    ///
    /// A preparer that does not apply to the current value variant must
    /// leave it untouched and return `Ok(())`. Only input that cannot be
    /// represented as the target field type is an error.
    fn prepare(&self, ctx: &mut PrepareContext) -> Result<(), PrepareError>;
}

/// Escapes phrase-match metacharacters in textual values.
///
/// Non-text values pass through untouched; a number needs no escaping and
/// is never stringified here. Acting only on `Text` also keeps the
/// preparer safe when chained after one that already changed the variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordPreparer;

impl ValuePreparer for KeywordPreparer {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn prepare(&self, ctx: &mut PrepareContext) -> Result<(), PrepareError> {
        if let FilterValue::Text(text) = ctx.value() {
            let escaped = escape_phrase_chars(text);
            ctx.set_value(FilterValue::Text(escaped));
        }
        Ok(())
    }
}

/// Parses textual values into numbers for numeric fields.
///
/// Text that does not parse as a finite number is a validation error
/// surfaced to the caller. Values that are already numeric, and flags,
/// pass through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericPreparer;

impl ValuePreparer for NumericPreparer {
    fn name(&self) -> &'static str {
        "numeric"
    }

    fn prepare(&self, ctx: &mut PrepareContext) -> Result<(), PrepareError> {
        let FilterValue::Text(text) = ctx.value() else {
            return Ok(());
        };

        let not_numeric = || PrepareError::NotNumeric {
            field: ctx.field().to_string(),
            value: text.clone(),
        };

        let parsed: f64 = text.trim().parse().map_err(|_| not_numeric())?;
        if !parsed.is_finite() {
            return Err(not_numeric());
        }

        ctx.set_value(FilterValue::Number(parsed));
        Ok(())
    }
}

/// Folds textual values to lowercase for raw-tokenized fields.
///
/// Fields indexed without an analyzer match case-sensitively; lowercasing
/// the filter value at preparation time mirrors what the index does at
/// write time. Non-text values pass through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercasePreparer;

impl ValuePreparer for LowercasePreparer {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    fn prepare(&self, ctx: &mut PrepareContext) -> Result<(), PrepareError> {
        if let FilterValue::Text(text) = ctx.value() {
            let lowered = text.to_lowercase();
            ctx.set_value(FilterValue::Text(lowered));
        }
        Ok(())
    }
}
