//! # Validation Module
//!
//! Input validation for orders and the values that accompany them.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Validation                                   │
//! │                                                                         │
//! │  validate_order(order)                                                 │
//! │       │                                                                 │
//! │       ├── items empty? ──────────────► CoreError::InvalidOrder         │
//! │       │                                                                 │
//! │       └── for each item (in order):                                    │
//! │              validate_line_item(i, item)                               │
//! │                   │                                                     │
//! │                   ├── price < 0 / non-finite? ──► InvalidItemData      │
//! │                   └── qty   < 0 / non-finite? ──► InvalidItemData      │
//! │                                                                         │
//! │  Fail fast: the first bad line wins, later lines are not inspected.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{LineItem, Order};

/// Result type for field validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Order Validators
// =============================================================================

/// Validates an order before pricing.
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_order;
/// use checkout_core::{LineItem, Order, TaxRate};
///
/// let good = Order::new(vec![LineItem::new(10.0, 1.0)], TaxRate::zero());
/// assert!(validate_order(&good).is_ok());
///
/// let empty = Order::new(vec![], TaxRate::zero());
/// assert!(validate_order(&empty).is_err());
/// ```
pub fn validate_order(order: &Order) -> CoreResult<()> {
    if order.items.is_empty() {
        return Err(CoreError::InvalidOrder);
    }

    for (index, item) in order.items.iter().enumerate() {
        validate_line_item(index, item)?;
    }

    Ok(())
}

/// Validates one line item. Zero price and zero quantity are allowed.
pub fn validate_line_item(index: usize, item: &LineItem) -> CoreResult<()> {
    if !is_valid_amount(item.price) {
        return Err(CoreError::InvalidItemData {
            index,
            field: "price",
        });
    }

    if !is_valid_amount(item.quantity) {
        return Err(CoreError::InvalidItemData {
            index,
            field: "quantity",
        });
    }

    Ok(())
}

fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an ISO 4217 style currency code: three uppercase ASCII letters.
///
/// Codes are not checked against a catalog.
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_currency_code;
///
/// assert!(validate_currency_code("EUR").is_ok());
/// assert!(validate_currency_code("eur").is_err());
/// assert!(validate_currency_code("").is_err());
/// ```
pub fn validate_currency_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "currency".to_string(),
        });
    }

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: "must be three uppercase letters".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
