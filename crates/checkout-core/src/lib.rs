//! # checkout-core: Pure Pricing Logic
//!
//! This crate prices an order in its own currency. It contains no I/O and
//! nothing async; the currency conversion step lives in `checkout-fx`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Pricing Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                checkout-fx (OrderProcessor)                     │   │
//! │  │     base price ──► CurrencyConverter ──► converted / base      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │  Order    │  │   Money   │  │ final     │  │  orders   │  │   │
//! │  │   │  LineItem │  │  rounding │  │ price     │  │  items    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ASYNC • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Order, LineItem, TaxRate, DiscountRate, PriceBreakdown
//! - [`money`] - Money type and cent rounding
//! - [`discount`] - The `DiscountService` capability
//! - [`pricing`] - `calculate_final_price` and `price_breakdown`
//! - [`validation`] - Order and field validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{calculate_final_price, FixedDiscount, LineItem, Order, TaxRate};
//!
//! let order = Order::new(vec![LineItem::new(100.0, 1.0)], TaxRate::zero());
//!
//! // A 90% discount is capped at 50%
//! let price = calculate_final_price(&order, Some(&FixedDiscount(0.9))).unwrap();
//! assert_eq!(price.as_major(), 50.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use discount::{DiscountService, FixedDiscount};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{calculate_final_price, price_breakdown};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest discount rate ever applied, whatever a discount service reports.
pub const MAX_DISCOUNT_RATE: f64 = 0.5;
