//! Error types for the lookup crate.

use thiserror::Error;

/// How a host should present a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The arguments themselves are unusable (spreadsheets show `#VALUE!`).
    InvalidInput,
    /// The search ran but nothing qualified and no fallback was given
    /// (spreadsheets show `#N/A`).
    NotAvailable,
}

/// Errors that can occur when normalizing arguments or running a lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The flattened lookup sequence has no elements.
    #[error("lookup sequence is empty")]
    EmptyLookup,

    /// Match mode code outside `-1, 0, 1, 2`.
    #[error("unrecognized match mode {0} (expected -1, 0, 1 or 2)")]
    InvalidMatchMode(i64),

    /// Search mode code outside `-2, -1, 1, 2`.
    #[error("unrecognized search mode {0} (expected -2, -1, 1 or 2)")]
    InvalidSearchMode(i64),

    /// A floating-point mode argument that cannot be truncated to an integer.
    #[error("mode argument {0} is not a finite number")]
    NonFiniteMode(f64),

    /// A mode argument of a kind other than number.
    #[error("mode argument must be numeric, got a {0} value")]
    NonNumericMode(&'static str),

    /// The wildcard pattern could not be compiled.
    #[error("invalid wildcard pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// No candidate qualified and no fallback value was supplied.
    #[error("no match found")]
    NotAvailable,
}

impl LookupError {
    /// Classifies this error for presentation by the host.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::NotAvailable => ErrorKind::NotAvailable,
            _ => ErrorKind::InvalidInput,
        }
    }

    /// Returns `true` if the lookup ran and found nothing.
    pub fn is_not_available(&self) -> bool {
        self.kind() == ErrorKind::NotAvailable
    }

    /// Returns `true` if the arguments were rejected before searching.
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }
}

/// Result type for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        assert_eq!(LookupError::EmptyLookup.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            LookupError::InvalidMatchMode(3).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            LookupError::InvalidSearchMode(0).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            LookupError::NonFiniteMode(f64::NAN).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            LookupError::NonNumericMode("text").kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(LookupError::NotAvailable.kind(), ErrorKind::NotAvailable);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            LookupError::InvalidMatchMode(7).to_string(),
            "unrecognized match mode 7 (expected -1, 0, 1 or 2)"
        );
        assert_eq!(LookupError::NotAvailable.to_string(), "no match found");
        assert!(LookupError::NotAvailable.is_not_available());
        assert!(LookupError::EmptyLookup.is_invalid_input());
    }
}
