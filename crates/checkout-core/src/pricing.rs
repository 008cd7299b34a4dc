//! # Pricing Module
//!
//! Turns an order into its final price in the order's own currency.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate_final_price(order, discount_service?)                        │
//! │                                                                         │
//! │  1. validate_order ────────────► InvalidOrder / InvalidItemData        │
//! │  2. subtotal   = Σ price × quantity                                    │
//! │  3. rate       = discount_service?.discount_for(order) or 0            │
//! │  4. applied    = clamp(rate, 0, 0.5)                                   │
//! │  5. discounted = subtotal × (1 − applied)                              │
//! │  6. with_tax   = discounted × (1 + tax_rate)                           │
//! │  7. total      = round half-up to the cent ──► AmountOutOfRange        │
//! │                                                                         │
//! │  Example: [{20,2},{10,3}], tax 0.2, discount 0.3                       │
//! │           70 → 49 → 58.8 → 58.80                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::discount::DiscountService;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{DiscountRate, Order, PriceBreakdown};
use crate::validation::validate_order;

/// Computes the validated, discounted, taxed and rounded price of an order.
///
/// The discount service, when given, is asked exactly once. The order's own
/// `discount_service` field is ignored here; the order processor passes it in
/// explicitly.
///
/// ## Example
/// ```rust
/// use checkout_core::{calculate_final_price, FixedDiscount, LineItem, Order, TaxRate};
///
/// let order = Order::new(
///     vec![LineItem::new(20.0, 2.0), LineItem::new(10.0, 3.0)],
///     TaxRate::from_fraction(0.2),
/// );
/// let price = calculate_final_price(&order, Some(&FixedDiscount(0.3))).unwrap();
/// assert_eq!(price.as_major(), 58.8);
/// ```
pub fn calculate_final_price(
    order: &Order,
    discount_service: Option<&dyn DiscountService>,
) -> CoreResult<Money> {
    price_breakdown(order, discount_service).map(|breakdown| breakdown.total)
}

/// Runs the pricing pipeline and returns every intermediate step.
pub fn price_breakdown(
    order: &Order,
    discount_service: Option<&dyn DiscountService>,
) -> CoreResult<PriceBreakdown> {
    validate_order(order)?;

    let subtotal: f64 = order.items.iter().map(|item| item.line_total()).sum();

    let discount_rate = discount_service
        .map(|service| DiscountRate::new(service.discount_for(order)))
        .unwrap_or_default();
    let applied_discount_rate = discount_rate.clamped();

    let discounted = subtotal * (1.0 - applied_discount_rate);
    let with_tax = discounted * order.tax_rate.multiplier();
    let total = Money::from_major_rounded(with_tax).ok_or(CoreError::AmountOutOfRange)?;

    debug!(
        subtotal,
        reported_discount = discount_rate.raw(),
        applied_discount_rate,
        capped = discount_rate.is_capped(),
        tax_rate = order.tax_rate.fraction(),
        total = %total,
        "Priced order"
    );

    Ok(PriceBreakdown {
        subtotal,
        discount_rate,
        applied_discount_rate,
        discounted,
        with_tax,
        total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::FixedDiscount;
    use crate::types::{LineItem, TaxRate};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn two_line_order() -> Order {
        Order::new(
            vec![LineItem::new(20.0, 2.0), LineItem::new(10.0, 3.0)],
            TaxRate::from_fraction(0.2),
        )
    }

    #[test]
    fn test_discount_then_tax() {
        let price = calculate_final_price(&two_line_order(), Some(&FixedDiscount(0.3))).unwrap();
        assert_eq!(price.as_major(), 58.8);
        assert_eq!(price.cents(), 5880);
    }

    #[test]
    fn test_discount_capped_at_half() {
        let order = Order::new(vec![LineItem::new(100.0, 1.0)], TaxRate::zero());
        let price = calculate_final_price(&order, Some(&FixedDiscount(0.9))).unwrap();
        assert_eq!(price.as_major(), 50.0);
    }

    #[test]
    fn test_any_discount_above_cap_matches_cap() {
        let order = two_line_order();
        let at_cap = calculate_final_price(&order, Some(&FixedDiscount(0.5))).unwrap();
        for rate in [0.51, 0.75, 1.0, 3.0] {
            let price = calculate_final_price(&order, Some(&FixedDiscount(rate))).unwrap();
            assert_eq!(price, at_cap, "rate {rate}");
        }
    }

    #[test]
    fn test_negative_discount_floored_to_zero() {
        let order = two_line_order();
        let none = calculate_final_price(&order, None).unwrap();
        let negative = calculate_final_price(&order, Some(&FixedDiscount(-0.4))).unwrap();
        assert_eq!(negative, none);
        assert_eq!(none.as_major(), 84.0);
    }

    #[test]
    fn test_no_service_means_no_discount() {
        let order = Order::new(vec![LineItem::new(19.99, 3.0)], TaxRate::zero());
        let price = calculate_final_price(&order, None).unwrap();
        assert_eq!(price.cents(), 5997);
    }

    #[test]
    fn test_rounds_half_up_to_cent() {
        // 0.125 is exact in binary, so this is a true tie
        let order = Order::new(vec![LineItem::new(0.125, 1.0)], TaxRate::zero());
        assert_eq!(calculate_final_price(&order, None).unwrap().cents(), 13);

        let order = Order::new(vec![LineItem::new(9.99, 1.0)], TaxRate::from_bps(825));
        // 9.99 × 1.0825 = 10.814175
        assert_eq!(calculate_final_price(&order, None).unwrap().cents(), 1081);
    }

    #[test]
    fn test_empty_order_rejected() {
        let order = Order::new(vec![], TaxRate::zero());
        let err = calculate_final_price(&order, None).unwrap_err();
        assert!(matches!(err, CoreError::InvalidOrder));
        assert_eq!(err.to_string(), "Invalid order");
    }

    #[test]
    fn test_null_json_order_rejected() {
        let err = Order::from_json("null")
            .and_then(|order| calculate_final_price(&order, None))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid order");

        let err = Order::from_json(r#"{"items":[]}"#)
            .and_then(|order| calculate_final_price(&order, None))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid order");
    }

    #[test]
    fn test_negative_item_rejected() {
        let order = Order::new(vec![LineItem::new(-10.0, 1.0)], TaxRate::zero());
        let err = calculate_final_price(&order, None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid item data");
    }

    #[test]
    fn test_total_beyond_cent_range_rejected() {
        let order = Order::new(vec![LineItem::new(1e20, 1.0)], TaxRate::zero());
        let err = calculate_final_price(&order, None).unwrap_err();
        assert!(matches!(err, CoreError::AmountOutOfRange));

        // 1e200 × 1e200 overflows the subtotal to infinity
        let order = Order::new(vec![LineItem::new(1e200, 1e200)], TaxRate::zero());
        let err = calculate_final_price(&order, None).unwrap_err();
        assert!(matches!(err, CoreError::AmountOutOfRange));
    }

    #[test]
    fn test_large_total_within_range_is_exact() {
        let order = Order::new(vec![LineItem::new(1e12, 1.0)], TaxRate::zero());
        let price = calculate_final_price(&order, None).unwrap();
        assert_eq!(price.cents(), 100_000_000_000_000);
    }

    #[test]
    fn test_invalid_item_skips_discount_service() {
        let calls = AtomicUsize::new(0);
        let counting = |_: &Order| {
            calls.fetch_add(1, Ordering::SeqCst);
            0.1
        };
        let order = Order::new(vec![LineItem::new(1.0, -1.0)], TaxRate::zero());
        assert!(calculate_final_price(&order, Some(&counting)).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_discount_service_called_once_with_order() {
        let calls = AtomicUsize::new(0);
        let counting = |order: &Order| {
            calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(order.items.len(), 2);
            0.3
        };
        calculate_final_price(&two_line_order(), Some(&counting)).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_breakdown_steps() {
        let breakdown = price_breakdown(&two_line_order(), Some(&FixedDiscount(0.9))).unwrap();
        assert_eq!(breakdown.subtotal, 70.0);
        assert_eq!(breakdown.discount_rate.raw(), 0.9);
        assert_eq!(breakdown.applied_discount_rate, 0.5);
        assert_eq!(breakdown.discounted, 35.0);
        assert_eq!(breakdown.total.as_major(), 42.0);
        assert_eq!(
            breakdown.total,
            calculate_final_price(&two_line_order(), Some(&FixedDiscount(0.9))).unwrap()
        );
    }
}
