//! # cart-core: Pure Validation Logic for Cart Files
//!
//! This crate checks delimited shopping-cart text against a fixed schema,
//! turns valid lines into typed records and totals them. It has zero I/O
//! dependencies: callers hand in file content as a string.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart File Pipeline                               │
//! │                                                                         │
//! │   raw text ──► validate() ──► Vec<ValidationError>                     │
//! │                    │                                                    │
//! │                    │ empty? content is trustworthy                      │
//! │                    ▼                                                    │
//! │   each data line ──► parse_line() ──► CartItem                         │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                                   calc_total() ──► f64                  │
//! │                                                                         │
//! │   Schema (static, read-only) is consulted by validate and parse_line   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`schema`] - The three fixed columns and their cell rules
//! - [`error`] - Validation error records and their constructors
//! - [`validation`] - Header, row-length and cell checks
//! - [`parser`] - Line to [`CartItem`] conversion
//! - [`total`] - Cart total calculation
//! - [`types`] - The [`CartItem`] record
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::{calc_total, parse_line, validate};
//!
//! let content = "Product name,Price,Quantity\nMollis consequat,9.00,2\n";
//! assert!(validate(content).is_empty());
//!
//! let items: Vec<_> = content.lines().skip(1).map(parse_line).collect();
//! assert_eq!(calc_total(&items), 18.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod parser;
pub mod schema;
pub mod total;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ErrorKind, ValidationError};
pub use parser::parse_line;
pub use schema::{CellRejection, CellValue, Column, ColumnType, Schema};
pub use total::calc_total;
pub use types::CartItem;
pub use validation::{validate, validate_with};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Cell separator within a line.
///
/// Cells are split on this character verbatim: there is no quoting or
/// escaping, so a cell can never contain it.
pub const DELIMITER: char = ',';
