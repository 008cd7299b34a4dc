//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - Order rejected by the pricing pipeline         │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  checkout-fx errors (separate crate)                                   │
//! │  ├── ConversionError  - Converter failures (always recovered)          │
//! │  └── FxError          - Processor configuration failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The two pricing failures keep their exact, caller-visible messages
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing pipeline errors.
///
/// Both validation failures are fatal to the call: no partial price is
/// ever produced.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The order is missing or carries no line items.
    ///
    /// ## When This Occurs
    /// - `items` is empty
    /// - JSON input was `null` or had no `items` key
    #[error("Invalid order")]
    InvalidOrder,

    /// A line item has a negative (or non-finite) price or quantity.
    ///
    /// One bad line invalidates the whole order, regardless of the others.
    #[error("Invalid item data")]
    InvalidItemData {
        /// Position of the offending line in `Order::items`.
        index: usize,
        /// Which field failed: `"price"` or `"quantity"`.
        field: &'static str,
    },

    /// The priced total is not finite or does not fit in integer cents.
    ///
    /// Only reachable with astronomically large prices or quantities.
    #[error("Order total out of range")]
    AmountOutOfRange,

    /// Input could not be read as an order at all.
    #[error("Malformed order: {0}")]
    MalformedOrder(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for currency codes and configuration values.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., lowercase currency code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
