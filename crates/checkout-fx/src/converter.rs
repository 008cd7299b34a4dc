//! # Currency Converter Capability
//!
//! The processor never knows where rates come from. Callers hand it a
//! [`CurrencyConverter`]: a provider client, a cached rate table, or in tests
//! a plain async closure.
//!
//! ```rust
//! use checkout_fx::{ConversionError, CurrencyConverter};
//!
//! # tokio_test();
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn tokio_test() {
//! let doubling = |amount: f64, _from: String, _to: String| async move {
//!     Ok::<_, ConversionError>(amount * 2.0)
//! };
//! assert_eq!(doubling.convert(50.0, "USD", "EUR").await, Ok(100.0));
//! # }
//! ```

use std::future::Future;

use async_trait::async_trait;

use crate::error::ConversionError;

/// Converts an amount between two currencies.
///
/// Arguments are positional: `(amount, from, to)`. Implementations must be
/// reentrant; concurrent calls may interleave arbitrarily.
#[async_trait]
pub trait CurrencyConverter: Send + Sync {
    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, ConversionError>;
}

#[async_trait]
impl<F, Fut> CurrencyConverter for F
where
    F: Fn(f64, String, String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<f64, ConversionError>> + Send + 'static,
{
    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        self(amount, from.to_string(), to.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_closure_receives_arguments_in_order() {
        let converter = |amount: f64, from: String, to: String| async move {
            assert_eq!((amount, from.as_str(), to.as_str()), (12.5, "USD", "JPY"));
            Ok::<_, ConversionError>(amount * 150.0)
        };
        assert_eq!(converter.convert(12.5, "USD", "JPY").await, Ok(1875.0));
    }

    #[tokio::test]
    async fn test_closure_as_trait_object() {
        let failing: Arc<dyn CurrencyConverter> =
            Arc::new(|_: f64, from: String, to: String| async move {
                Err::<f64, _>(ConversionError::UnsupportedPair { from, to })
            });
        let err = failing.convert(1.0, "USD", "XTS").await.unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnsupportedPair {
                from: "USD".into(),
                to: "XTS".into()
            }
        );
    }
}
