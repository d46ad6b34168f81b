//! # Parse Error Types
//!
//! Fatal failures of the file pipeline.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (file gateway)  ──► ParseError::Read                   │
//! │                                                                         │
//! │  Vec<ValidationError> (non-empty) ──► ParseError::Validation           │
//! │                                                                         │
//! │  ParseError ──► anyhow (binary) ──► stderr + exit code 1               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `cart_core::validate` never fails; only the composed `parse` turns a
//! non-empty error list into a hard error.

use std::io;
use std::path::PathBuf;

use cart_core::ValidationError;
use thiserror::Error;

/// Errors from reading and parsing a cart file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file gateway could not deliver the content.
    ///
    /// ## When This Occurs
    /// - File does not exist
    /// - Permission denied
    /// - Content is not valid UTF-8
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but failed validation.
    ///
    /// Carries the full error list so callers can still report it.
    #[error("{} failed validation with {} error(s)", .path.display(), .errors.len())]
    Validation {
        path: PathBuf,
        errors: Vec<ValidationError>,
    },
}

impl ParseError {
    /// Validation errors carried by this failure, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            ParseError::Validation { errors, .. } => errors,
            ParseError::Read { .. } => &[],
        }
    }
}

/// Result type for file pipeline operations.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParseError::Validation {
            path: PathBuf::from("cart.csv"),
            errors: vec![ValidationError::row_length(1, 3, 2)],
        };
        assert_eq!(err.to_string(), "cart.csv failed validation with 1 error(s)");
        assert_eq!(err.validation_errors().len(), 1);

        let err = ParseError::Read {
            path: PathBuf::from("missing.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read missing.csv: not found");
        assert!(err.validation_errors().is_empty());
    }
}
