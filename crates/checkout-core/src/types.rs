//! # Domain Types
//!
//! Plain data consumed and produced by the pricing pipeline.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │    LineItem     │   │  PriceBreakdown │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  items          │──►│  price          │   │  subtotal       │       │
//! │  │  tax_rate       │   │  quantity       │   │  discount_rate  │       │
//! │  │  currency?      │   └─────────────────┘   │  discounted     │       │
//! │  │  discount svc?  │                         │  with_tax       │       │
//! │  └─────────────────┘                         │  total (Money)  │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    TaxRate      │   │  DiscountRate   │                             │
//! │  │  0.2 = 20%      │   │  clamped to     │                             │
//! │  │                 │   │  [0, 0.5]       │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::discount::DiscountService;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::MAX_DISCOUNT_RATE;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate as a fraction of the discounted subtotal.
///
/// `0.2` is 20%. Zero is valid and leaves the amount unchanged. The rate is
/// not range-checked; callers own its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(f64);

impl TaxRate {
    /// Creates a tax rate from a fraction (`0.0825` = 8.25%).
    #[inline]
    pub const fn from_fraction(fraction: f64) -> Self {
        TaxRate(fraction)
    }

    /// Creates a tax rate from basis points (`825` = 8.25%).
    #[inline]
    pub fn from_bps(bps: u32) -> Self {
        TaxRate(bps as f64 / 10_000.0)
    }

    /// Creates a tax rate from a percentage (`8.25` = 8.25%).
    #[inline]
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate(pct / 100.0)
    }

    /// Returns the rate as a fraction.
    #[inline]
    pub const fn fraction(&self) -> f64 {
        self.0
    }

    /// Returns the multiplier applied to a pre-tax amount.
    #[inline]
    pub fn multiplier(&self) -> f64 {
        1.0 + self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0.0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate as reported by a discount service, before capping.
///
/// ## Clamping
/// ```text
///   reported:  -0.2    0.0    0.3    0.5    0.9    NaN
///                │      │      │      │      │      │
///   clamped:   0.0    0.0    0.3    0.5    0.5    0.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(f64);

impl DiscountRate {
    /// Wraps a raw fractional rate.
    #[inline]
    pub const fn new(rate: f64) -> Self {
        DiscountRate(rate)
    }

    /// No discount.
    #[inline]
    pub const fn none() -> Self {
        DiscountRate(0.0)
    }

    /// Returns the raw rate as reported.
    #[inline]
    pub const fn raw(&self) -> f64 {
        self.0
    }

    /// Returns the rate limited to `[0, MAX_DISCOUNT_RATE]`.
    pub fn clamped(&self) -> f64 {
        if self.0.is_nan() {
            return 0.0;
        }
        self.0.clamp(0.0, MAX_DISCOUNT_RATE)
    }

    /// Checks whether the reported rate exceeded the cap.
    #[inline]
    pub fn is_capped(&self) -> bool {
        self.0 > MAX_DISCOUNT_RATE
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::none()
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One priced line of an order: contributes `price × quantity`.
///
/// Quantity is fractional to allow weighed goods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unit price in major units of the order currency.
    pub price: f64,
    /// Units ordered.
    pub quantity: f64,
}

impl LineItem {
    /// Creates a line item.
    #[inline]
    pub const fn new(price: f64, quantity: f64) -> Self {
        LineItem { price, quantity }
    }

    /// Unrounded `price × quantity`.
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity
    }
}

// =============================================================================
// Order
// =============================================================================

/// A purchase request: line items, a tax rate, an optional currency code and
/// an optional discount capability.
///
/// The discount service is never serialized; attach it with
/// [`Order::with_discount_service`] after parsing.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub items: Vec<LineItem>,

    #[serde(default)]
    pub tax_rate: TaxRate,

    /// ISO 4217 code of the prices. Absent means the processor default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip)]
    pub discount_service: Option<Arc<dyn DiscountService>>,
}

impl Order {
    /// Creates an order with no currency and no discount service.
    pub fn new(items: Vec<LineItem>, tax_rate: TaxRate) -> Self {
        Order {
            items,
            tax_rate,
            currency: None,
            discount_service: None,
        }
    }

    /// Sets the currency code of the order's prices.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Attaches the discount capability used by the order processor.
    pub fn with_discount_service(mut self, service: Arc<dyn DiscountService>) -> Self {
        self.discount_service = Some(service);
        self
    }

    /// Parses an order from caller-supplied JSON.
    ///
    /// ## Mapping
    /// ```text
    /// "null"                 → CoreError::InvalidOrder
    /// {} (no "items")        → Order with no items (rejected when priced)
    /// not an order object    → CoreError::MalformedOrder
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::Order;
    ///
    /// let order = Order::from_json(
    ///     r#"{"items":[{"price":20,"quantity":2}],"taxRate":0.2,"currency":"USD"}"#,
    /// ).unwrap();
    /// assert_eq!(order.items.len(), 1);
    /// assert_eq!(order.currency.as_deref(), Some("USD"));
    ///
    /// assert!(Order::from_json("null").is_err());
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let order: Option<Order> =
            serde_json::from_str(json).map_err(|e| CoreError::MalformedOrder(e.to_string()))?;
        order.ok_or(CoreError::InvalidOrder)
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("items", &self.items)
            .field("tax_rate", &self.tax_rate)
            .field("currency", &self.currency)
            .field("has_discount_service", &self.discount_service.is_some())
            .finish()
    }
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// Every step of the pricing pipeline for one order.
///
/// All fields except `total` are unrounded; `total` is the value
/// `calculate_final_price` returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Σ price × quantity.
    pub subtotal: f64,
    /// Discount rate as reported, before capping.
    pub discount_rate: DiscountRate,
    /// Rate actually applied, within `[0, 0.5]`.
    pub applied_discount_rate: f64,
    /// `subtotal × (1 − applied_discount_rate)`.
    pub discounted: f64,
    /// `discounted × (1 + tax_rate)`.
    pub with_tax: f64,
    /// `with_tax` rounded half-up to the cent.
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
