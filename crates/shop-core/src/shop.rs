//! # Shop
//!
//! Owns the catalog and the user registry.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Shop ──owns──► Vec<Arc<Product>> ◄──shares── OrderLine.product         │
//! │    │                   │                                                │
//! │    │                   └──shares──► search results                      │
//! │    │                                                                    │
//! │    └──owns──► Vec<User> ──owns──► Vec<Order>                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Authentication
//! Lookup takes the FIRST user registered under a login. A later user with
//! the same login is never consulted, even if its password would match.
//! Unknown login and wrong password both come back as `None`.
//!
//! ```text
//! authenticate_user_id("user1", pw) ──► Some(UserId) ──► user_mut(id) ──► add_order
//!        (one Argon2 verification)                      (no re-check)
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::money::Money;
use crate::search::Searchable;
use crate::types::Product;
use crate::user::User;

/// Handle to a registered user, issued by a successful login.
///
/// Users are never removed, so a handle stays valid for the shop that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(usize);

/// In-memory storefront.
///
/// ## Usage
/// ```rust
/// use shop_core::{Money, Product, Searchable, Shop, User};
///
/// let mut shop = Shop::new();
/// shop.add_product(Product::new("Headphones", Money::from_cents(10_000), "", "Accessories", 4.2));
/// shop.register_user(User::new("user1", "password123").unwrap());
///
/// assert!(shop.authenticate_user("user1", "password123").is_some());
/// assert!(shop.authenticate_user("user1", "nope").is_none());
/// assert_eq!(shop.search_by_rating(4.0).len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Shop {
    products: Vec<Arc<Product>>,
    users: Vec<User>,
}

impl Shop {
    /// Creates an empty shop.
    pub fn new() -> Self {
        Shop::default()
    }

    /// Appends a product to the catalog and returns its shared handle.
    ///
    /// No duplicate check.
    pub fn add_product(&mut self, product: Product) -> Arc<Product> {
        debug!(
            name = %product.name,
            category = %product.category,
            price = %product.price,
            "Adding product"
        );

        let product = Arc::new(product);
        self.products.push(Arc::clone(&product));
        product
    }

    /// Appends a user to the registry.
    ///
    /// No uniqueness check on login.
    pub fn register_user(&mut self, user: User) {
        debug!(login = %user.login(), "Registering user");
        self.users.push(user);
    }

    /// Returns the first user registered as `login` if `password` matches.
    pub fn authenticate_user(&self, login: &str, password: &str) -> Option<&User> {
        let id = self.authenticate_user_id(login, password)?;
        self.users.get(id.0)
    }

    /// Same lookup as [`Shop::authenticate_user`], returning a handle that
    /// can later be turned into mutable access with [`Shop::user_mut`].
    pub fn authenticate_user_id(&self, login: &str, password: &str) -> Option<UserId> {
        let Some(index) = self.users.iter().position(|u| u.login() == login) else {
            warn!(login = %login, "Authentication failed");
            return None;
        };

        if !self.users[index].authenticate(password) {
            warn!(login = %login, "Authentication failed");
            return None;
        }

        info!(login = %login, "User authenticated");
        Some(UserId(index))
    }

    /// The user behind a login handle.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(id.0)
    }

    /// Mutable access to an already authenticated user, e.g. to append to
    /// the order history.
    pub fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.get_mut(id.0)
    }

    /// The whole catalog, in insertion order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    fn filter(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }
}

impl Searchable for Shop {
    fn search_by_price(&self, min_price: Money, max_price: Money) -> Vec<Arc<Product>> {
        let results = self.filter(|p| min_price <= p.price && p.price <= max_price);
        debug!(
            min = %min_price,
            max = %max_price,
            count = results.len(),
            "Searched products by price"
        );
        results
    }

    fn search_by_category(&self, category: &str) -> Vec<Arc<Product>> {
        let results = self.filter(|p| p.in_category(category));
        debug!(category = %category, count = results.len(), "Searched products by category");
        results
    }

    fn search_by_rating(&self, min_rating: f64) -> Vec<Arc<Product>> {
        let results = self.filter(|p| p.rating >= min_rating);
        debug!(min_rating, count = results.len(), "Searched products by rating");
        results
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Order;

    fn dollars(major: i64) -> Money {
        Money::from_major_minor(major, 0)
    }

    fn sample_shop() -> Shop {
        let mut shop = Shop::new();
        shop.add_product(Product::new(
            "Laptop",
            dollars(1200),
            "High performance laptop",
            "Electronics",
            4.5,
        ));
        shop.add_product(Product::new(
            "Headphones",
            dollars(100),
            "Noise-cancelling headphones",
            "Accessories",
            4.2,
        ));
        shop.add_product(Product::new(
            "Smartphone",
            dollars(800),
            "Latest model smartphone",
            "Electronics",
            4.8,
        ));
        shop.register_user(User::new("user1", "password123").unwrap());
        shop
    }

    fn names(products: &[Arc<Product>]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_counts() {
        let shop = sample_shop();
        assert_eq!(shop.product_count(), 3);
        assert_eq!(shop.user_count(), 1);
        assert_eq!(
            names(shop.products()),
            vec!["Laptop", "Headphones", "Smartphone"]
        );
    }

    #[test]
    fn test_add_product_returns_catalog_handle() {
        let mut shop = Shop::new();
        let handle = shop.add_product(Product::new("Mouse", dollars(20), "", "Accessories", 3.9));
        assert!(Arc::ptr_eq(&handle, &shop.products()[0]));
    }

    #[test]
    fn test_duplicate_products_are_kept() {
        let mut shop = Shop::new();
        let mouse = Product::new("Mouse", dollars(20), "", "Accessories", 3.9);
        shop.add_product(mouse.clone());
        shop.add_product(mouse);
        assert_eq!(shop.search_by_category("accessories").len(), 2);
    }

    #[test]
    fn test_search_by_price_inclusive_bounds() {
        let shop = sample_shop();
        assert_eq!(
            names(&shop.search_by_price(dollars(100), dollars(800))),
            vec!["Headphones", "Smartphone"]
        );
        assert_eq!(
            names(&shop.search_by_price(dollars(800), dollars(800))),
            vec!["Smartphone"]
        );
        assert_eq!(
            names(&shop.search_by_price(dollars(0), dollars(5000))),
            vec!["Laptop", "Headphones", "Smartphone"]
        );
    }

    #[test]
    fn test_search_by_price_excludes_outside() {
        let shop = sample_shop();
        let results = shop.search_by_price(Money::from_cents(10_001), Money::from_cents(79_999));
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_by_price_inverted_bounds_is_empty() {
        let shop = sample_shop();
        assert!(shop.search_by_price(dollars(1200), dollars(100)).is_empty());
    }

    #[test]
    fn test_search_by_category_ignores_case() {
        let shop = sample_shop();
        for query in ["Electronics", "electronics", "ELECTRONICS"] {
            assert_eq!(
                names(&shop.search_by_category(query)),
                vec!["Laptop", "Smartphone"]
            );
        }
    }

    #[test]
    fn test_search_by_category_no_partial_match() {
        let shop = sample_shop();
        assert!(shop.search_by_category("Electro").is_empty());
        assert!(shop.search_by_category("Toys").is_empty());
    }

    #[test]
    fn test_search_by_rating_includes_threshold() {
        let shop = sample_shop();
        assert_eq!(
            names(&shop.search_by_rating(4.5)),
            vec!["Laptop", "Smartphone"]
        );
        assert_eq!(names(&shop.search_by_rating(4.8)), vec!["Smartphone"]);
        assert!(shop.search_by_rating(4.9).is_empty());
    }

    #[test]
    fn test_searches_on_empty_catalog() {
        let shop = Shop::new();
        assert!(shop.search_by_price(dollars(0), dollars(100)).is_empty());
        assert!(shop.search_by_category("Electronics").is_empty());
        assert!(shop.search_by_rating(0.0).is_empty());
    }

    #[test]
    fn test_search_results_share_catalog_products() {
        let shop = sample_shop();
        let results = shop.search_by_category("Electronics");
        assert!(Arc::ptr_eq(&results[0], &shop.products()[0]));
        assert!(Arc::ptr_eq(&results[1], &shop.products()[2]));
    }

    #[test]
    fn test_authenticate_user() {
        let shop = sample_shop();
        let user = shop.authenticate_user("user1", "password123").unwrap();
        assert_eq!(user.login(), "user1");

        assert!(shop.authenticate_user("user1", "wrong").is_none());
        assert!(shop.authenticate_user("User1", "password123").is_none());
        assert!(shop.authenticate_user("nobody", "password123").is_none());
    }

    #[test]
    fn test_authenticate_uses_first_matching_login() {
        let mut shop = sample_shop();
        shop.register_user(User::new("user1", "other-password").unwrap());
        assert_eq!(shop.user_count(), 2);

        assert!(shop.authenticate_user("user1", "password123").is_some());
        assert!(shop.authenticate_user("user1", "other-password").is_none());
    }

    #[test]
    fn test_user_id_grants_access_without_rechecking() {
        let mut shop = sample_shop();
        let id = shop.authenticate_user_id("user1", "password123").unwrap();
        assert!(shop.authenticate_user_id("user1", "wrong").is_none());
        assert!(shop.authenticate_user_id("nobody", "password123").is_none());

        let laptop = Arc::clone(&shop.search_by_category("Electronics")[0]);
        let mut order = Order::new();
        order.add_item(&laptop, 1).unwrap();

        shop.user_mut(id).unwrap().add_order(order);

        let user = shop.user(id).unwrap();
        assert_eq!(user.login(), "user1");
        assert_eq!(user.orders().len(), 1);
    }

    #[test]
    fn test_user_id_points_at_first_matching_login() {
        let mut shop = sample_shop();
        shop.register_user(User::new("user1", "other-password").unwrap());

        let id = shop.authenticate_user_id("user1", "password123").unwrap();
        shop.user_mut(id).unwrap().add_order(Order::new());

        assert_eq!(
            shop.authenticate_user("user1", "password123")
                .unwrap()
                .orders()
                .len(),
            1
        );
        assert!(shop.authenticate_user_id("user1", "other-password").is_none());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut shop = sample_shop();

        assert!(shop.authenticate_user("user1", "letmein").is_none());

        let electronics = shop.search_by_category("Electronics");
        assert_eq!(names(&electronics), vec!["Laptop", "Smartphone"]);

        let mut order = Order::new();
        order.add_item(&electronics[0], 1).unwrap();
        assert_eq!(order.total_price(), dollars(1200));

        let id = shop.authenticate_user_id("user1", "password123").unwrap();
        let user = shop.user_mut(id).unwrap();
        user.add_order(order);
        assert_eq!(user.orders()[0].total_price().to_string(), "$1200.00");
        assert_eq!(user.orders()[0].status(), "Pending");
    }
}
