//! # Validation Module
//!
//! Checks raw cart file content against a [`Schema`] and reports every
//! problem found.
//!
//! ## Check Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      validate(content)                                  │
//! │                                                                         │
//! │  row 0 (header)                                                        │
//! │  └── each position: trimmed cell == column name?  ── no ──► HEADER     │
//! │                                                                         │
//! │  row 1..n (data)                                                       │
//! │  ├── cell count == schema length?  ── no ──► ROW, skip the row's cells │
//! │  └── each cell: column rule holds?  ── no ──► CELL, keep going         │
//! │                                                                         │
//! │  Errors accumulate in row order. Nothing short-circuits.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::{validate, ErrorKind};
//!
//! let errors = validate("Product name,Price,Quantity\nTea,1");
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].kind, ErrorKind::Row);
//! ```

use crate::error::ValidationError;
use crate::schema::Schema;
use crate::DELIMITER;

/// Validates content against the cart schema.
///
/// Returns every error in header → row 1 → row 2 … order. An empty list
/// means the content is safe to hand to [`parse_line`](crate::parse_line).
pub fn validate(content: &str) -> Vec<ValidationError> {
    validate_with(Schema::cart(), content)
}

/// Validates content against an arbitrary schema.
///
/// Lines are split on `\n` (a preceding `\r` is dropped). A trailing line
/// break does not start another data row. Empty content is checked as an
/// empty header line.
pub fn validate_with(schema: &Schema, content: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut lines = content.lines();

    check_header(schema, lines.next().unwrap_or(""), &mut errors);

    for (index, line) in lines.enumerate() {
        check_row(schema, index + 1, line, &mut errors);
    }

    errors
}

// =============================================================================
// Header
// =============================================================================

/// Compares header cells with column names position by position.
///
/// Only positions present in both the header and the schema are compared:
/// a short header leaves the missing names unreported, and extra header
/// cells are ignored.
fn check_header(schema: &Schema, header: &str, errors: &mut Vec<ValidationError>) {
    let cells = header.split(DELIMITER);

    for (position, (cell, column)) in cells.zip(schema.columns()).enumerate() {
        if cell.trim() != column.name {
            errors.push(ValidationError::header_mismatch(position, column.name, cell));
        }
    }
}

// =============================================================================
// Data Rows
// =============================================================================

fn check_row(schema: &Schema, row: usize, line: &str, errors: &mut Vec<ValidationError>) {
    let cells: Vec<&str> = line.split(DELIMITER).collect();

    // A row of the wrong shape has no meaningful cell positions
    if cells.len() != schema.len() {
        errors.push(ValidationError::row_length(row, schema.len(), cells.len()));
        return;
    }

    for (position, (cell, column)) in cells.iter().zip(schema.columns()).enumerate() {
        if let Err(rejection) = column.validate(cell) {
            errors.push(ValidationError::cell(row, position, &rejection));
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
