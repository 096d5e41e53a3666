//! Loosely typed filter values.

use std::fmt;

/// Largest f64 at which every integer is still exactly representable.
const MAX_INTEGRAL: f64 = 9_007_199_254_740_992.0;

/// A raw or prepared filter value.
///
/// Filter criteria arrive from the application loosely typed; preparers may
/// change the variant as a value moves through the chain (e.g. a textual
/// `"42"` becomes `Number(42.0)` after numeric preparation). A context
/// holds exactly one of these at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// A textual value.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A boolean flag.
    Flag(bool),
}

impl FilterValue {
    /// Creates a textual value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns the textual content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) | Self::Flag(_) => None,
        }
    }

    /// Returns the numeric content, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) | Self::Flag(_) => None,
        }
    }

    /// Returns true if this is a textual value.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl fmt::Display for FilterValue {
    /// Renders the value in engine clause syntax.
    ///
    /// Integral numbers render without a fractional part, so `42.0` becomes
    /// `42` in the clause text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Number(number) => {
                if number.fract() == 0.0 && number.is_finite() && number.abs() < MAX_INTEGRAL {
                    write!(f, "{}", *number as i64)
                } else {
                    write!(f, "{number}")
                }
            }
            Self::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_constructor() {
        assert_eq!(
            FilterValue::text("rust"),
            FilterValue::Text("rust".to_string())
        );
    }

    #[test]
    fn as_text_on_text() {
        assert_eq!(FilterValue::text("rust").as_text(), Some("rust"));
    }

    #[test]
    fn as_text_on_number() {
        assert_eq!(FilterValue::Number(1.0).as_text(), None);
    }

    #[test]
    fn as_number_on_number() {
        assert_eq!(FilterValue::Number(2.5).as_number(), Some(2.5));
    }

    #[test]
    fn as_number_on_flag() {
        assert_eq!(FilterValue::Flag(true).as_number(), None);
    }

    #[test]
    fn integral_number_renders_without_fraction() {
        assert_eq!(FilterValue::Number(42.0).to_string(), "42");
    }

    #[test]
    fn fractional_number_renders_as_is() {
        assert_eq!(FilterValue::Number(2.5).to_string(), "2.5");
    }

    #[test]
    fn negative_integral_number() {
        assert_eq!(FilterValue::Number(-7.0).to_string(), "-7");
    }

    #[test]
    fn flag_renders_as_keyword() {
        assert_eq!(FilterValue::Flag(true).to_string(), "true");
        assert_eq!(FilterValue::Flag(false).to_string(), "false");
    }
}
