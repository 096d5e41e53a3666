//! Filter criteria and engine clause compilation.
//!
//! A [`FilterCriterion`] is what the application submits: a field plus raw,
//! unprepared values. The [`ClauseCompiler`] runs every value through the
//! field's preparer chain and only then embeds it into a [`FilterClause`],
//! so raw user input never reaches the structural query syntax.

use std::fmt;

use sift_query::{FilterValue, PreparerRegistry};

use crate::ClauseError;

/// An application-level filter criterion before preparation.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterCriterion {
    /// Match documents whose field contains the value as a single term.
    Term {
        /// Field to filter on.
        field: String,
        /// Raw filter value.
        value: FilterValue,
    },

    /// Match documents whose field contains the exact phrase.
    Phrase {
        /// Field to filter on.
        field: String,
        /// Raw filter value.
        value: FilterValue,
    },

    /// Match documents whose field falls within the interval.
    Range {
        /// Field to filter on.
        field: String,
        /// Raw lower bound, `None` when unbounded below.
        from: Option<FilterValue>,
        /// Raw upper bound, `None` when unbounded above.
        to: Option<FilterValue>,
    },
}

impl FilterCriterion {
    /// Creates a term criterion.
    pub fn term(field: impl Into<String>, value: FilterValue) -> Self {
        Self::Term {
            field: field.into(),
            value,
        }
    }

    /// Creates a phrase criterion.
    pub fn phrase(field: impl Into<String>, value: FilterValue) -> Self {
        Self::Phrase {
            field: field.into(),
            value,
        }
    }

    /// Creates a range criterion.
    pub fn range(
        field: impl Into<String>,
        from: Option<FilterValue>,
        to: Option<FilterValue>,
    ) -> Self {
        Self::Range {
            field: field.into(),
            from,
            to,
        }
    }
}

/// An engine-native filter clause holding prepared values.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterClause {
    /// A single-term filter.
    Term {
        /// Field the clause filters on.
        field: String,
        /// Prepared value.
        value: FilterValue,
    },

    /// An exact-phrase filter.
    Phrase {
        /// Field the clause filters on.
        field: String,
        /// Prepared value.
        value: FilterValue,
    },

    /// An interval filter.
    Range {
        /// Field the clause filters on.
        field: String,
        /// Prepared lower bound, `None` when unbounded below.
        from: Option<FilterValue>,
        /// Prepared upper bound, `None` when unbounded above.
        to: Option<FilterValue>,
    },
}

impl FilterClause {
    /// Renders the clause in the engine's filter syntax.
    ///
    /// Open range ends render as `*`; the wildcard exists only in engine
    /// syntax, the data model keeps `None`.
    pub fn render(&self) -> String {
        match self {
            Self::Term { field, value } => format!("{field}:{value}"),
            Self::Phrase { field, value } => format!("{field}:\"{value}\""),
            Self::Range { field, from, to } => {
                let lower = from
                    .as_ref()
                    .map_or_else(|| "*".to_string(), ToString::to_string);
                let upper = to
                    .as_ref()
                    .map_or_else(|| "*".to_string(), ToString::to_string);
                format!("{field}:[{lower} TO {upper}]")
            }
        }
    }
}

impl fmt::Display for FilterClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Compiles filter criteria into engine clauses.
///
/// The compiler decides the clause shape; the preparer chain owns the
/// value content, including escaping.
pub struct ClauseCompiler<'a> {
    /// Preparer chains keyed by field.
    registry: &'a PreparerRegistry,
}

impl<'a> ClauseCompiler<'a> {
    /// Creates a compiler over the given preparer registry.
    pub fn new(registry: &'a PreparerRegistry) -> Self {
        Self { registry }
    }

    /// Compiles one criterion into a clause.
    ///
    /// A range criterion with neither bound is rejected: such a clause
    /// would filter nothing and signals a caller bug.
    pub fn compile(&self, criterion: FilterCriterion) -> Result<FilterClause, ClauseError> {
        match criterion {
            FilterCriterion::Term { field, value } => {
                let value = self.registry.prepare(&field, value)?;
                Ok(FilterClause::Term { field, value })
            }
            FilterCriterion::Phrase { field, value } => {
                let value = self.registry.prepare(&field, value)?;
                Ok(FilterClause::Phrase { field, value })
            }
            FilterCriterion::Range { field, from, to } => {
                if from.is_none() && to.is_none() {
                    return Err(ClauseError::EmptyRange { field });
                }
                let from = from
                    .map(|bound| self.registry.prepare(&field, bound))
                    .transpose()?;
                let to = to
                    .map(|bound| self.registry.prepare(&field, bound))
                    .transpose()?;
                Ok(FilterClause::Range { field, from, to })
            }
        }
    }
}
