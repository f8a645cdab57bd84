//! # Catalog Types
//!
//! ## Product
//! ```text
//! ┌─────────────────────────┐
//! │        Product          │
//! │  ─────────────────────  │
//! │  name                   │
//! │  price       (Money)    │
//! │  description            │
//! │  category    (ci key)   │
//! │  rating      (0.0-5.0)  │
//! └─────────────────────────┘
//! ```
//!
//! Products carry no id. Once added to a [`Shop`](crate::Shop) they are
//! shared as `Arc<Product>` between the catalog, search results and order
//! lines, so identity is pointer identity.

use serde::Serialize;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// No field is validated: negative prices and ratings outside 0.0-5.0 are
/// stored as given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Free-text description.
    pub description: String,

    /// Category name. Compared case-insensitively by search.
    pub category: String,

    /// Average rating, conventionally 0.0 to 5.0.
    pub rating: f64,
}

impl Product {
    /// Creates a product.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        rating: f64,
    ) -> Self {
        Product {
            name: name.into(),
            price,
            description: description.into(),
            category: category.into(),
            rating,
        }
    }

    /// Whether this product belongs to `category`, ignoring case.
    ///
    /// Whole-string comparison: `"Electro"` does not match `"Electronics"`.
    /// Characters are compared one to one, so `"straße"` does not match
    /// `"STRASSE"`.
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .chars()
            .map(simple_uppercase)
            .eq(category.chars().map(simple_uppercase))
    }
}

/// Single-character uppercase mapping.
///
/// Characters whose uppercase form is more than one character (`ß` → `SS`)
/// are left as they are.
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product::new(
            "Laptop",
            Money::from_major_minor(1200, 0),
            "High performance laptop",
            "Electronics",
            4.5,
        )
    }

    #[test]
    fn test_new_keeps_fields() {
        let product = laptop();
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.price.cents(), 120_000);
        assert_eq!(product.description, "High performance laptop");
        assert_eq!(product.category, "Electronics");
        assert_eq!(product.rating, 4.5);
    }

    #[test]
    fn test_new_accepts_out_of_range_values() {
        let odd = Product::new("Odd", Money::from_cents(-100), "", "Misc", 7.5);
        assert!(odd.price.is_negative());
        assert_eq!(odd.rating, 7.5);
    }

    #[test]
    fn test_in_category_ignores_case() {
        let product = laptop();
        assert!(product.in_category("Electronics"));
        assert!(product.in_category("electronics"));
        assert!(product.in_category("ELECTRONICS"));
    }

    #[test]
    fn test_in_category_is_whole_string() {
        let product = laptop();
        assert!(!product.in_category("Electro"));
        assert!(!product.in_category("Electronics "));
        assert!(!product.in_category(""));
    }

    #[test]
    fn test_in_category_non_ascii() {
        let product = Product::new("Kaffee", Money::from_cents(899), "", "Getränke", 4.0);
        assert!(product.in_category("GETRÄNKE"));
    }

    #[test]
    fn test_in_category_compares_char_by_char() {
        let product = Product::new("Karte", Money::from_cents(250), "", "straße", 3.0);
        assert!(!product.in_category("STRASSE"));
        assert!(!product.in_category("strasse"));
        assert!(product.in_category("STRAßE"));
        assert!(product.in_category("Straße"));
    }
}
