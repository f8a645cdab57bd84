//! # Users
//!
//! A user is a login, a stored credential and an order history.
//!
//! ## Credential Storage
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  User::new("user1", "password123")                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Argon2 + random salt ──► "$argon2id$v=19$m=...$<salt>$<hash>"         │
//! │                                (only this string is kept)               │
//! │                                                                         │
//! │  user.authenticate("password123")                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  verify against PHC string ──► true / false                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The outcome matches exact string equality with the original password;
//! the plain text is never stored.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::error::{CoreError, CoreResult};
use crate::order::Order;

// =============================================================================
// User
// =============================================================================

/// A registered user.
///
/// The order history is append-only: read it with [`User::orders`], extend it
/// with [`User::add_order`].
#[derive(Debug, Clone)]
pub struct User {
    login: String,
    password_hash: String,
    orders: Vec<Order>,
}

impl User {
    /// Creates a user, hashing `password` for storage.
    ///
    /// ## Errors
    /// `CoreError::Credential` if a salt cannot be generated or hashing fails.
    pub fn new(login: impl Into<String>, password: &str) -> CoreResult<Self> {
        let login = login.into();
        let password_hash = hash_password(password).map_err(|e| CoreError::Credential {
            login: login.clone(),
            reason: e.to_string(),
        })?;

        Ok(User {
            login,
            password_hash,
            orders: Vec::new(),
        })
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    /// True iff `password` is exactly the password this user was created with.
    pub fn authenticate(&self, password: &str) -> bool {
        verify_password(password, &self.password_hash)
    }

    /// Past orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Appends an order to the history.
    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Hash a password into a PHC string with a fresh salt.
fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC string.
///
/// A hash that fails to parse never verifies.
fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
