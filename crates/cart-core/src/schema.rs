//! # Schema Module
//!
//! The fixed column layout of a cart file and the rule each cell must satisfy.
//!
//! ## Cart Columns
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  index │ header text    │ ColumnType       │ valid when                 │
//! │  ──────┼────────────────┼──────────────────┼──────────────────────────  │
//! │    0   │ "Product name" │ StringNonempty   │ trimmed cell not empty     │
//! │    1   │ "Price"        │ PositiveNumber   │ finite number > 0          │
//! │    2   │ "Quantity"     │ PositiveNumber   │ finite number > 0          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cells are judged on their trimmed text, but rejections always carry the
//! raw cell so messages show exactly what the file contained.

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Column Type
// =============================================================================

/// The kind of value a column accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Any text that is not empty after trimming.
    StringNonempty,
    /// A finite number strictly greater than zero.
    PositiveNumber,
}

/// A cell that passed its column rule, in typed form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    /// Trimmed, non-empty text.
    Text(&'a str),
    /// Parsed positive number.
    Number(f64),
}

/// Why a cell failed its column rule.
///
/// The `Display` output is the user-facing message that ends up in
/// [`ValidationError::message`](crate::error::ValidationError).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellRejection {
    #[error("Expected cell to be a nonempty string but received \"{received}\".")]
    EmptyString { received: String },

    #[error("Expected cell to be a positive number but received \"{received}\".")]
    NotPositiveNumber { received: String },
}

impl CellRejection {
    /// The raw, untrimmed cell text that was rejected.
    pub fn received(&self) -> &str {
        match self {
            CellRejection::EmptyString { received }
            | CellRejection::NotPositiveNumber { received } => received,
        }
    }
}

impl ColumnType {
    /// Checks a raw cell against this column type.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::schema::{CellValue, ColumnType};
    ///
    /// assert_eq!(ColumnType::PositiveNumber.check(" 2.50 "), Ok(CellValue::Number(2.5)));
    /// assert!(ColumnType::PositiveNumber.check("0").is_err());
    /// assert!(ColumnType::PositiveNumber.check("NaN").is_err());
    /// assert!(ColumnType::StringNonempty.check("   ").is_err());
    /// ```
    pub fn check(self, raw: &str) -> Result<CellValue<'_>, CellRejection> {
        let cell = raw.trim();

        match self {
            ColumnType::StringNonempty => {
                if cell.is_empty() {
                    return Err(CellRejection::EmptyString {
                        received: raw.to_string(),
                    });
                }
                Ok(CellValue::Text(cell))
            }
            ColumnType::PositiveNumber => match cell.parse::<f64>() {
                // `parse` accepts "NaN" and "inf", so finiteness is checked too
                Ok(number) if number.is_finite() && number > 0.0 => Ok(CellValue::Number(number)),
                _ => Err(CellRejection::NotPositiveNumber {
                    received: raw.to_string(),
                }),
            },
        }
    }
}

// =============================================================================
// Column
// =============================================================================

/// One expected column: its exact header text and its cell rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Header text the file must carry at this position.
    pub name: &'static str,

    /// Rule applied to every data cell at this position.
    pub kind: ColumnType,
}

impl Column {
    /// Validates one raw cell of this column.
    #[inline]
    pub fn validate<'a>(&self, raw: &'a str) -> Result<CellValue<'a>, CellRejection> {
        self.kind.check(raw)
    }
}

// =============================================================================
// Schema
// =============================================================================

/// Errors raised when building a custom [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Schema must have at least one column")]
    Empty,

    #[error("Column name '{0}' appears more than once")]
    DuplicateColumn(&'static str),
}

/// Ordered, immutable list of expected columns.
///
/// Position gives a column its meaning; names are unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Schema {
    columns: &'static [Column],
}

static CART_SCHEMA: Schema = Schema {
    columns: &[
        Column {
            name: "Product name",
            kind: ColumnType::StringNonempty,
        },
        Column {
            name: "Price",
            kind: ColumnType::PositiveNumber,
        },
        Column {
            name: "Quantity",
            kind: ColumnType::PositiveNumber,
        },
    ],
};

impl Schema {
    /// Position of the product name in the cart schema.
    pub const NAME: usize = 0;
    /// Position of the unit price in the cart schema.
    pub const PRICE: usize = 1;
    /// Position of the quantity in the cart schema.
    pub const QUANTITY: usize = 2;

    /// The process-wide cart schema.
    #[inline]
    pub fn cart() -> &'static Schema {
        &CART_SCHEMA
    }

    /// Builds a schema from a static column list.
    ///
    /// ## Rules
    /// - At least one column
    /// - Column names are unique
    pub fn new(columns: &'static [Column]) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::Empty);
        }

        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|earlier| earlier.name == column.name) {
                return Err(SchemaError::DuplicateColumn(column.name));
            }
        }

        Ok(Schema { columns })
    }

    /// All columns in positional order.
    #[inline]
    pub fn columns(&self) -> &'static [Column] {
        self.columns
    }

    /// The column at `index`, if any.
    #[inline]
    pub fn column(&self, index: usize) -> Option<&'static Column> {
        self.columns.get(index)
    }

    /// Position of the column with this exact header text.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    /// Number of columns (and so the required cell count of every row).
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false for a constructed schema.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_schema_layout() {
        let schema = Schema::cart();
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.columns()[Schema::NAME].name, "Product name");
        assert_eq!(schema.columns()[Schema::PRICE].name, "Price");
        assert_eq!(schema.columns()[Schema::QUANTITY].name, "Quantity");
        assert_eq!(schema.position("Quantity"), Some(2));
        assert_eq!(schema.position("quantity"), None);
    }

    #[test]
    fn test_nonempty_string_rule() {
        let name = Schema::cart().column(Schema::NAME).unwrap();

        assert_eq!(name.validate(" Milk "), Ok(CellValue::Text("Milk")));

        let err = name.validate("  ").unwrap_err();
        assert_eq!(err.received(), "  ");
        assert_eq!(
            err.to_string(),
            "Expected cell to be a nonempty string but received \"  \"."
        );
    }

    #[test]
    fn test_positive_number_rule() {
        let price = Schema::cart().column(Schema::PRICE).unwrap();

        assert_eq!(price.validate("1.000"), Ok(CellValue::Number(1.0)));
        assert_eq!(price.validate(" 5.5 "), Ok(CellValue::Number(5.5)));

        for bad in ["0", "-1", "'1'", "NaN", "inf", "", "abc"] {
            assert!(price.validate(bad).is_err(), "{bad:?} should be rejected");
        }

        let err = price.validate("-1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected cell to be a positive number but received \"-1\"."
        );
    }

    #[test]
    fn test_custom_schema_rules() {
        static DUPLICATE: [Column; 2] = [
            Column {
                name: "Price",
                kind: ColumnType::PositiveNumber,
            },
            Column {
                name: "Price",
                kind: ColumnType::PositiveNumber,
            },
        ];
        static SINGLE: [Column; 1] = [Column {
            name: "Label",
            kind: ColumnType::StringNonempty,
        }];

        assert_eq!(Schema::new(&[]), Err(SchemaError::Empty));
        assert_eq!(
            Schema::new(&DUPLICATE),
            Err(SchemaError::DuplicateColumn("Price"))
        );
        assert_eq!(Schema::new(&SINGLE).unwrap().len(), 1);
    }
}
