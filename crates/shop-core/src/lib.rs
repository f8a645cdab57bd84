//! # shop-core: Pure Domain Logic for the Storefront
//!
//! Catalog, users, orders and search as plain in-memory data structures.
//! Nothing in this crate touches the network, the disk or the console.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/shop-demo                               │   │
//! │  │    config ──► seed catalog ──► login ──► search ──► order       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   types   │  │   order   │  │   shop    │  │   │
//! │  │   │   Money   │  │  Product  │  │   Order   │  │   Shop    │  │   │
//! │  │   │           │  │           │  │ OrderLine │  │ Searchable│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                        ┌───────────┐                            │   │
//! │  │                        │   user    │                            │   │
//! │  │                        │   User    │                            │   │
//! │  │                        └───────────┘                            │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Catalog types (Product)
//! - [`order`] - Orders and their line items
//! - [`user`] - Users, credentials and order history
//! - [`search`] - The `Searchable` contract
//! - [`shop`] - The shop aggregate
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::{Money, Order, Product, Searchable, Shop};
//!
//! let mut shop = Shop::new();
//! shop.add_product(Product::new(
//!     "Laptop",
//!     Money::from_major_minor(1200, 0),
//!     "High performance laptop",
//!     "Electronics",
//!     4.5,
//! ));
//!
//! let electronics = shop.search_by_category("electronics");
//! let mut order = Order::new();
//! order.add_item(&electronics[0], 2).unwrap();
//! assert_eq!(order.total_price(), Money::from_cents(240_000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod search;
pub mod shop;
pub mod types;
pub mod user;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shop_core::Money` instead of
// `use shop_core::money::Money`

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use order::{Order, OrderLine};
pub use search::Searchable;
pub use shop::{Shop, UserId};
pub use types::*;
pub use user::User;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Status every new order starts in.
///
/// Status is free-form text; nothing checks transitions away from it.
pub const DEFAULT_ORDER_STATUS: &str = "Pending";
