//! # Error Types
//!
//! Structured validation results for cart files.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         ErrorKind                                       │
//! │                                                                         │
//! │  Header  - header cell does not match the expected column name         │
//! │            row = 0, column = mismatched position                       │
//! │                                                                         │
//! │  Row     - data row has the wrong number of cells                      │
//! │            row = line index, column = none (-1)                        │
//! │                                                                         │
//! │  Cell    - cell fails its column rule                                  │
//! │            row = line index, column = cell position                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Validation errors are values, collected into a list, never thrown
//! 2. Every error names its exact location (row, column)
//! 3. Messages embed the offending text verbatim

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::schema::CellRejection;

// =============================================================================
// Error Kind
// =============================================================================

/// Which check produced a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Header row shape/name mismatch.
    Header,
    /// Wrong cell count in a data row.
    Row,
    /// A cell failed its column's rule.
    Cell,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::Header => "header",
            ErrorKind::Row => "row",
            ErrorKind::Cell => "cell",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// One problem found while validating a cart file.
///
/// Equality is structural: two errors are equal when kind, row, column and
/// message all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Error)]
#[error("[{kind}] row {row}, column {}: {message}", column_label(.column))]
pub struct ValidationError {
    /// Which check failed.
    pub kind: ErrorKind,

    /// Line index; the header is row 0, the first data row is row 1.
    pub row: usize,

    /// Cell position, or `None` for row-scoped errors.
    #[serde(serialize_with = "serialize_column")]
    pub column: Option<usize>,

    /// Human-readable description.
    pub message: String,
}

impl ValidationError {
    /// Creates an error with exactly the given fields.
    pub fn new(
        kind: ErrorKind,
        row: usize,
        column: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        ValidationError {
            kind,
            row,
            column,
            message: message.into(),
        }
    }

    /// Header cell at `column` is not named `expected`.
    ///
    /// `received` is the raw header cell, printed without quotes.
    pub fn header_mismatch(column: usize, expected: &str, received: &str) -> Self {
        ValidationError::new(
            ErrorKind::Header,
            0,
            Some(column),
            format!("Expected header to be named \"{expected}\" but received {received}."),
        )
    }

    /// Data row at `row` has `received` cells instead of `expected`.
    pub fn row_length(row: usize, expected: usize, received: usize) -> Self {
        ValidationError::new(
            ErrorKind::Row,
            row,
            None,
            format!("Expected row to have {expected} cells but received {received}."),
        )
    }

    /// Cell at (`row`, `column`) was rejected by its column rule.
    pub fn cell(row: usize, column: usize, rejection: &CellRejection) -> Self {
        ValidationError::new(ErrorKind::Cell, row, Some(column), rejection.to_string())
    }

    /// Column as a plain integer, `-1` for row-scoped errors.
    #[inline]
    pub fn column_index(&self) -> i64 {
        self.column.map_or(-1, |c| c as i64)
    }
}

fn column_label(column: &Option<usize>) -> String {
    match column {
        Some(c) => c.to_string(),
        None => "-".to_string(),
    }
}

fn serialize_column<S: Serializer>(column: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
    match column {
        Some(c) => s.serialize_u64(*c as u64),
        None => s.serialize_i64(-1),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
