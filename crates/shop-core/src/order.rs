//! # Orders
//!
//! An order is a list of line items with a running total.
//!
//! ## Line Item Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Arc<Product> ──┐                                                       │
//! │                 ├──► add_item() ──► OrderLine { product, qty,           │
//! │  quantity ──────┘         │                     unit_price snapshot }   │
//! │                           │                                             │
//! │                           └──► total_price += unit_price × qty          │
//! │                                                                         │
//! │  Invariant: total_price == Σ line.line_total()   (never recomputed,    │
//! │             never allowed to drift)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Orders do not own products. Each line holds a shared handle to the
//! catalog entry plus the unit price it had when the line was added.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::DEFAULT_ORDER_STATUS;

// =============================================================================
// Order Line
// =============================================================================

/// One product and the quantity ordered.
///
/// The line total is computed once, with overflow checks, when the line is
/// built; fields are read-only afterwards so it cannot go stale.
#[derive(Debug, Clone, Serialize)]
pub struct OrderLine {
    product: Arc<Product>,
    quantity: i64,
    unit_price: Money,
    line_total: Money,
}

impl OrderLine {
    /// Creates a line, snapshotting the product's current price.
    ///
    /// Quantity is not validated; zero and negative values are kept.
    ///
    /// ## Errors
    /// `CoreError::Overflow` if `price × quantity` does not fit in i64 cents.
    pub fn new(product: Arc<Product>, quantity: i64) -> CoreResult<Self> {
        let unit_price = product.price;
        let line_total = unit_price
            .checked_multiply_quantity(quantity)
            .ok_or_else(|| CoreError::Overflow {
                product: product.name.clone(),
                quantity,
            })?;

        Ok(OrderLine {
            product,
            quantity,
            unit_price,
            line_total,
        })
    }

    /// Shared handle to the catalog product.
    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Product price at the moment the line was added (frozen).
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.line_total
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order placed by a user.
///
/// ## Invariants
/// - `total_price` equals the sum of every line's `line_total()`
/// - Lines keep insertion order; the same product may appear on several lines
///
/// Status is free-form text, `"Pending"` until someone changes it.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    id: String,
    created_at: DateTime<Utc>,
    lines: Vec<OrderLine>,
    total_price: Money,
    status: String,
}

impl Order {
    /// Creates an empty order with a fresh id.
    pub fn new() -> Self {
        Order {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            lines: Vec::new(),
            total_price: Money::zero(),
            status: DEFAULT_ORDER_STATUS.to_string(),
        }
    }

    /// Adds `quantity` units of `product` as a new line.
    ///
    /// The total grows by exactly `product.price * quantity`.
    ///
    /// ## Errors
    /// `CoreError::Overflow` if the line total or the new order total does
    /// not fit in i64 cents. The order is left unchanged.
    pub fn add_item(&mut self, product: &Arc<Product>, quantity: i64) -> CoreResult<()> {
        let line = OrderLine::new(Arc::clone(product), quantity)?;
        let total_price = self
            .total_price
            .checked_add(line.line_total())
            .ok_or_else(|| CoreError::Overflow {
                product: product.name.clone(),
                quantity,
            })?;

        self.total_price = total_price;
        self.lines.push(line);
        Ok(())
    }

    /// Order id (UUID v4).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// When the order was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Line items in the order they were added.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Running total of all lines.
    #[inline]
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Replaces the status. Any value is accepted.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Number of lines.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(OrderLine::quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
