//! # Discount Capability
//!
//! The pricing pipeline never decides a discount itself; it asks a
//! [`DiscountService`] supplied by the caller and caps the answer.
//!
//! Any `Fn(&Order) -> f64 + Send + Sync` closure is a discount service, so a
//! test double is a one-liner:
//!
//! ```rust
//! use checkout_core::{calculate_final_price, LineItem, Order, TaxRate};
//!
//! let order = Order::new(vec![LineItem::new(100.0, 1.0)], TaxRate::zero());
//! let half_off = |_: &Order| 0.5;
//! let price = calculate_final_price(&order, Some(&half_off)).unwrap();
//! assert_eq!(price.as_major(), 50.0);
//! ```

use crate::types::Order;

/// Reports the fractional discount (`0.3` = 30%) granted to an order.
///
/// The value is clamped to `[0, 0.5]` by the calculator. It is called at most
/// once per pricing call.
pub trait DiscountService: Send + Sync {
    fn discount_for(&self, order: &Order) -> f64;
}

impl<F> DiscountService for F
where
    F: Fn(&Order) -> f64 + Send + Sync,
{
    fn discount_for(&self, order: &Order) -> f64 {
        self(order)
    }
}

/// The same discount for every order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDiscount(pub f64);

impl DiscountService for FixedDiscount {
    fn discount_for(&self, _order: &Order) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LineItem, TaxRate};

    #[test]
    fn test_closure_is_discount_service() {
        let order = Order::new(vec![LineItem::new(10.0, 10.0)], TaxRate::zero());
        let bulk = |o: &Order| if o.items[0].quantity >= 10.0 { 0.1 } else { 0.0 };
        assert_eq!(bulk.discount_for(&order), 0.1);
    }

    #[test]
    fn test_fixed_discount() {
        let order = Order::default();
        assert_eq!(FixedDiscount(0.25).discount_for(&order), 0.25);
    }
}
