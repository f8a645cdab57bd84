//! The demonstration run.
//!
//! Everything the user sees goes to the writer passed in; diagnostics go
//! through `tracing` so they never interleave with the transcript.

use std::io::Write;

use anyhow::Context;
use shop_core::{Money, Order, Product, Searchable, Shop, User};
use tracing::{info, warn};

use crate::config::DemoConfig;

/// Credentials registered by `seed_shop`.
const SAMPLE_LOGIN: &str = "user1";
const SAMPLE_PASSWORD: &str = "password123";

/// Builds the sample catalog and user.
pub fn seed_shop() -> anyhow::Result<Shop> {
    let mut shop = Shop::new();

    shop.add_product(Product::new(
        "Laptop",
        Money::from_major_minor(1200, 0),
        "High performance laptop",
        "Electronics",
        4.5,
    ));
    shop.add_product(Product::new(
        "Headphones",
        Money::from_major_minor(100, 0),
        "Noise-cancelling headphones",
        "Accessories",
        4.2,
    ));
    shop.add_product(Product::new(
        "Smartphone",
        Money::from_major_minor(800, 0),
        "Latest model smartphone",
        "Electronics",
        4.8,
    ));

    shop.register_user(User::new(SAMPLE_LOGIN, SAMPLE_PASSWORD)?);

    info!(
        products = shop.product_count(),
        users = shop.user_count(),
        "Shop seeded"
    );
    Ok(shop)
}

/// Runs the login → search → order sequence against `shop`.
pub fn run(shop: &mut Shop, config: &DemoConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let Some(user_id) = shop.authenticate_user_id(&config.login, &config.password) else {
        writeln!(out, "Login failed.")?;
        return Ok(());
    };
    writeln!(out, "Login successful!")?;

    let matches = shop.search_by_category(&config.category);
    writeln!(out, "{}:", config.category)?;
    for product in &matches {
        writeln!(
            out,
            "{} - {} - {} stars",
            product.name, product.price, product.rating
        )?;
    }

    let Some(first) = matches.first() else {
        warn!(category = %config.category, "Nothing to order");
        writeln!(out, "No products found in {}.", config.category)?;
        return Ok(());
    };

    let mut order = Order::new();
    order
        .add_item(first, config.quantity)
        .context("Failed to build order")?;
    let total = order.total_price();
    let receipt = config
        .receipt_json
        .then(|| serde_json::to_string_pretty(&order))
        .transpose()
        .context("Failed to render receipt")?;

    info!(order_id = %order.id(), total = %total, "Order placed");

    shop.user_mut(user_id)
        .context("Authenticated user missing from shop")?
        .add_order(order);

    writeln!(out, "Order placed: {}", total)?;
    if let Some(receipt) = receipt {
        writeln!(out, "{}", receipt)?;
    }

    Ok(())
}
