//! Filter-value preparation for sift search queries.
//!
//! Raw filter values submitted by an application cannot be embedded into an
//! engine query clause as-is: textual values need phrase-match escaping,
//! numeric fields need validated numbers, raw-tokenized fields need case
//! folding. This crate provides the preparation pipeline that runs before
//! clause compilation:
//!
//! - [`FilterValue`]: the loosely typed value a filter criterion carries
//! - [`PrepareContext`]: single-slot mutable carrier passed through a chain
//! - [`ValuePreparer`]: pluggable per-field value transform
//! - [`PreparerRegistry`]: field-keyed, ordered preparer chains
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use sift_query::{FieldMatcher, FilterValue, KeywordPreparer, PreparerRegistry};
//!
//! let mut registry = PreparerRegistry::new();
//! registry
//!     .register(FieldMatcher::exact("title"), Arc::new(KeywordPreparer))
//!     .unwrap();
//!
//! let prepared = registry
//!     .prepare("title", FilterValue::text("he said \"hi\""))
//!     .unwrap();
//! assert_eq!(prepared, FilterValue::text("he said \\\"hi\\\""));
//! ```

#![warn(missing_docs)]

mod context;
mod error;
mod escape;
mod matcher;
mod prepare;
mod registry;
mod value;

pub use context::PrepareContext;
pub use error::{PrepareError, RegistryError};
pub use escape::{escape_phrase_chars, is_special_char};
pub use matcher::FieldMatcher;
pub use prepare::{KeywordPreparer, LowercasePreparer, NumericPreparer, ValuePreparer};
pub use registry::PreparerRegistry;
pub use value::FilterValue;
