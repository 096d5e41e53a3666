//! Error types for value preparation.

use thiserror::Error;

/// Errors raised while preparing a single filter value.
///
/// Type mismatches are not errors: a preparer that does not apply to the
/// current value variant skips it. Only input that cannot be represented as
/// the target field type at all is surfaced, so the caller never embeds a
/// silently corrupted value into a query clause.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrepareError {
    /// A textual value could not be parsed as a number for a numeric field.
    #[error("value '{value}' for field '{field}' is not numeric")]
    NotNumeric {
        /// The field the value was destined for.
        field: String,
        /// The offending raw text.
        value: String,
    },
}

/// Registration-time configuration errors.
///
/// These indicate integrator mistakes, are fatal to startup, and are never
/// raised per-request.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A field pattern failed to compile.
    #[error("invalid field pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern that failed to compile.
        pattern: String,
        /// Underlying glob error.
        source: globset::Error,
    },

    /// The same preparer was registered twice under an equal matcher.
    #[error("preparer '{name}' is already registered for fields matching '{matcher}'")]
    DuplicatePreparer {
        /// Name of the preparer.
        name: String,
        /// Display form of the matcher.
        matcher: String,
    },
}
