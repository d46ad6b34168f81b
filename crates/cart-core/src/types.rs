//! # Domain Types
//!
//! The typed record produced for each valid data line.

use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Item
// =============================================================================

/// One parsed cart line.
///
/// ## Identity
/// `id` is a UUID v4 assigned when the line is parsed. Two parses of the same
/// text produce two different ids, so it must be treated as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique identifier (UUID v4), generated per parse.
    pub id: String,

    /// Product name, trimmed.
    pub name: String,

    /// Unit price.
    pub price: f64,

    /// Number of units.
    pub quantity: f64,
}

impl CartItem {
    /// Price multiplied by quantity.
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = CartItem {
            id: "a".to_string(),
            name: "Tea".to_string(),
            price: 5.5,
            quantity: 2.0,
        };
        assert_eq!(item.line_total(), 11.0);
    }
}
