//! End-to-end pricing flow through the public API: JSON order in, quoted
//! amount out.

use std::sync::{Arc, Mutex};

use checkout_core::{calculate_final_price, CoreError, FixedDiscount, Order};
use checkout_fx::{ConversionError, OrderProcessor};

fn parse(json: &str) -> Order {
    Order::from_json(json).expect("valid order json")
}

#[test]
fn discounted_and_taxed_order() {
    let order = parse(r#"{"items":[{"price":20,"quantity":2},{"price":10,"quantity":3}],"taxRate":0.2}"#);
    let price = calculate_final_price(&order, Some(&FixedDiscount(0.3))).unwrap();
    assert_eq!(price.as_major(), 58.8);
}

#[test]
fn oversized_discount_is_capped() {
    let order = parse(r#"{"items":[{"price":100,"quantity":1}],"taxRate":0}"#);
    let price = calculate_final_price(&order, Some(&FixedDiscount(0.9))).unwrap();
    assert_eq!(price.as_major(), 50.0);
}

#[test]
fn null_and_empty_orders_are_rejected() {
    let err = Order::from_json("null").unwrap_err();
    assert_eq!(err.to_string(), "Invalid order");

    let empty = parse(r#"{"items":[]}"#);
    let err = calculate_final_price(&empty, None).unwrap_err();
    assert!(matches!(err, CoreError::InvalidOrder));
}

#[tokio::test]
async fn converted_price_is_returned() {
    let seen = Arc::new(Mutex::new(None));
    let record = seen.clone();
    let processor = OrderProcessor::new(Arc::new(move |amount: f64, from: String, to: String| {
        *record.lock().unwrap() = Some((amount, from, to));
        async { Ok::<_, ConversionError>(100.0) }
    }));

    let order = parse(r#"{"items":[{"price":50,"quantity":1}],"taxRate":0,"currency":"USD"}"#)
        .with_discount_service(Arc::new(|_: &Order| 0.0));

    assert_eq!(processor.process_order(&order, "EUR").await.unwrap(), 100.0);
    assert_eq!(
        seen.lock().unwrap().clone(),
        Some((50.0, "USD".to_string(), "EUR".to_string()))
    );
}

#[tokio::test]
async fn failed_conversion_returns_base_price() {
    let processor = OrderProcessor::new(Arc::new(|_: f64, _: String, _: String| async {
        Err::<f64, _>(ConversionError::failed("Conversion failed"))
    }));

    let order = parse(r#"{"items":[{"price":50,"quantity":1}],"taxRate":0,"currency":"USD"}"#)
        .with_discount_service(Arc::new(|_: &Order| 0.0));

    assert_eq!(processor.process_order(&order, "EUR").await.unwrap(), 50.0);
}
