//! # Cart Total
//!
//! Sums `price × quantity` over parsed items using plain `f64` arithmetic.

use crate::types::CartItem;

/// Returns the cart total; `0.0` for an empty cart.
pub fn calc_total(items: &[CartItem]) -> f64 {
    items.iter().fold(0.0, |total, item| total + item.line_total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;

    #[test]
    fn test_total_of_two_lines() {
        let items = [parse_line("test,20,5.000"), parse_line("test,5.5000,2")];
        assert_eq!(calc_total(&items), 111.0);
    }

    #[test]
    fn test_empty_cart() {
        assert_eq!(calc_total(&[]), 0.0);
    }
}
