//! # Search Contract
//!
//! The three catalog queries a storefront backend must answer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  search_by_price(min, max)   min <= price <= max     (both inclusive)  │
//! │  search_by_category(name)    category == name        (ignoring case)   │
//! │  search_by_rating(min)       rating >= min           (inclusive)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Results keep catalog order and may be empty. None of the queries can
//! fail: an empty catalog or `min > max` simply matches nothing.

use std::sync::Arc;

use crate::money::Money;
use crate::types::Product;

/// Read-only product search.
///
/// [`Shop`](crate::Shop) is the in-memory implementation. Another backend
/// implements the same three methods with the same semantics.
pub trait Searchable {
    /// Products priced within `[min_price, max_price]`.
    fn search_by_price(&self, min_price: Money, max_price: Money) -> Vec<Arc<Product>>;

    /// Products whose category equals `category`, ignoring case.
    fn search_by_category(&self, category: &str) -> Vec<Arc<Product>>;

    /// Products rated `min_rating` or higher.
    fn search_by_rating(&self, min_rating: f64) -> Vec<Arc<Product>>;
}
