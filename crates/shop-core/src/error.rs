//! # Error Types
//!
//! Domain-specific error types for shop-core.
//!
//! ## What Is (and Isn't) an Error
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Failure Reporting                                   │
//! │                                                                         │
//! │  Unknown login / wrong password  ──► None        (not an error)        │
//! │  Search with no matches          ──► empty Vec   (not an error)        │
//! │  Odd prices, ratings, quantities ──► accepted    (not validated)       │
//! │                                                                         │
//! │  Password hashing failure        ──► CoreError::Credential             │
//! │  Order amount out of i64 range   ──► CoreError::Overflow               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Never include secrets in error messages

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A password could not be turned into a stored credential.
    ///
    /// ## When This Occurs
    /// - The OS random source failed while generating a salt
    /// - The hasher rejected its parameters
    #[error("Failed to create credential for {login}: {reason}")]
    Credential { login: String, reason: String },

    /// A line total or order total left the representable range.
    ///
    /// ## When This Occurs
    /// - `price × quantity` exceeds i64 cents (e.g. an absurd quantity)
    /// - Adding a line would push the running order total past i64 cents
    #[error("Amount overflow adding {quantity} × {product} to order")]
    Overflow { product: String, quantity: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::Credential {
            login: "user1".to_string(),
            reason: "salt generation failed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to create credential for user1: salt generation failed"
        );

        let err = CoreError::Overflow {
            product: "Laptop".to_string(),
            quantity: 100_000_000_000_000,
        };
        assert_eq!(
            err.to_string(),
            "Amount overflow adding 100000000000000 × Laptop to order"
        );
    }
}
