//! # Line Parser
//!
//! Turns one data line into a [`CartItem`].
//!
//! Parsing is a separate pass from validation: [`parse_line`] trusts its
//! input. Run [`validate`](crate::validate) over the file first; a malformed
//! line here yields an empty name or `NaN` numbers, never an error.

use uuid::Uuid;

use crate::schema::Schema;
use crate::types::CartItem;
use crate::DELIMITER;

/// Parses a validated data line into a [`CartItem`] with a fresh id.
///
/// ## Example
/// ```rust
/// use cart_core::parse_line;
///
/// let item = parse_line("test,1.00000000,1");
/// assert_eq!(item.name, "test");
/// assert_eq!(item.price, 1.0);
/// assert_eq!(item.quantity, 1.0);
/// ```
pub fn parse_line(line: &str) -> CartItem {
    let cells: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    let cell = |index: usize| cells.get(index).copied();

    CartItem {
        id: Uuid::new_v4().to_string(),
        name: cell(Schema::NAME).unwrap_or_default().to_string(),
        price: parse_number(cell(Schema::PRICE)),
        quantity: parse_number(cell(Schema::QUANTITY)),
    }
}

fn parse_number(cell: Option<&str>) -> f64 {
    cell.and_then(|c| c.parse().ok()).unwrap_or(f64::NAN)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_zeros_normalized() {
        let item = parse_line("test,1.00000000,1");
        assert_eq!(item.name, "test");
        assert_eq!(item.price, 1.0);
        assert_eq!(item.quantity, 1.0);
    }

    #[test]
    fn test_cells_are_trimmed() {
        let item = parse_line("  Green tea , 5.5000 , 2 ");
        assert_eq!(item.name, "Green tea");
        assert_eq!(item.price, 5.5);
        assert_eq!(item.quantity, 2.0);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = parse_line("test,1,1");
        let b = parse_line("test,1,1");
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_malformed_line_is_not_checked() {
        let item = parse_line("only-a-name");
        assert_eq!(item.name, "only-a-name");
        assert!(item.price.is_nan());
        assert!(item.quantity.is_nan());

        let item = parse_line("x,abc,2");
        assert!(item.price.is_nan());
        assert_eq!(item.quantity, 2.0);
    }
}
