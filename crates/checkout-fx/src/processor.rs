//! # Order Processor
//!
//! Prices an order, then converts the price into the customer's currency.
//! Conversion is best-effort: if it fails the customer is quoted the base
//! price in the order's own currency.
//!
//! ## Per-Call State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────────────────┐   validation error                          │
//! │   │ computing-base-price │ ─────────────────────► Err(CoreError)       │
//! │   └──────────┬───────────┘                                             │
//! │              │ base price                                               │
//! │              ▼                                                          │
//! │   ┌──────────────────────┐   Ok(v)                                     │
//! │   │      converting      │ ─────────────────────► Converted (v)        │
//! │   │  (single await)      │                                             │
//! │   └──────────┬───────────┘                                             │
//! │              │ Err(_) / timeout                                         │
//! │              ▼                                                          │
//! │        DegradedToBase (base price, error logged and dropped)           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! The processor holds an `Arc<dyn CurrencyConverter>` and an immutable
//! config. Clones share the converter; concurrent calls share nothing
//! mutable.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use checkout_core::{calculate_final_price, CoreResult, Money, Order};

use crate::config::ProcessorConfig;
use crate::converter::CurrencyConverter;
use crate::error::{ConversionError, FxResult};

// =============================================================================
// Outcome Types
// =============================================================================

/// Terminal state of one `process_order` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConversionOutcome {
    /// The converter answered; its value was returned unchanged.
    Converted,
    /// The converter failed; the base price was returned instead.
    DegradedToBase { reason: String },
}

impl ConversionOutcome {
    /// Returns true if the converter's value was used.
    pub fn is_converted(&self) -> bool {
        matches!(self, ConversionOutcome::Converted)
    }
}

/// Result of processing an order, with the path that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedOrder {
    /// Final price in the order's own currency.
    pub base_price: Money,
    /// Source currency the base price is expressed in.
    pub source_currency: String,
    /// Amount returned to the caller.
    pub amount: f64,
    /// Currency of `amount`: the target when converted, else the source.
    pub currency: String,
    /// Whether the converter's answer or the base price was used.
    pub outcome: ConversionOutcome,
}

// =============================================================================
// Order Processor
// =============================================================================

/// Computes an order's final price and converts it to a target currency.
#[derive(Clone)]
pub struct OrderProcessor {
    converter: Arc<dyn CurrencyConverter>,
    config: ProcessorConfig,
}

impl OrderProcessor {
    /// Creates a processor with default configuration.
    pub fn new(converter: Arc<dyn CurrencyConverter>) -> Self {
        OrderProcessor {
            converter,
            config: ProcessorConfig::default(),
        }
    }

    /// Creates a processor with an explicit configuration.
    ///
    /// The configuration is validated first, so a zero timeout or a
    /// malformed default currency never reaches a conversion.
    pub fn with_config(
        converter: Arc<dyn CurrencyConverter>,
        config: ProcessorConfig,
    ) -> FxResult<Self> {
        config.validate()?;
        Ok(OrderProcessor { converter, config })
    }

    /// Prices `order` with its own discount service and converts the result
    /// into `target_currency`.
    ///
    /// Validation errors are returned. Conversion errors are not: the base
    /// price is returned instead.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use checkout_core::{LineItem, Order, TaxRate};
    /// use checkout_fx::{ConversionError, OrderProcessor};
    ///
    /// # tokio_test();
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn tokio_test() {
    /// let order = Order::new(vec![LineItem::new(50.0, 1.0)], TaxRate::zero()).with_currency("USD");
    ///
    /// let broken = OrderProcessor::new(Arc::new(|_: f64, _: String, _: String| async {
    ///     Err::<f64, _>(ConversionError::failed("rate provider down"))
    /// }));
    /// assert_eq!(broken.process_order(&order, "EUR").await.unwrap(), 50.0);
    /// # }
    /// ```
    pub async fn process_order(&self, order: &Order, target_currency: &str) -> CoreResult<f64> {
        self.process_order_detailed(order, target_currency)
            .await
            .map(|processed| processed.amount)
    }

    /// Same as [`process_order`](Self::process_order), but also reports
    /// which terminal state was reached.
    pub async fn process_order_detailed(
        &self,
        order: &Order,
        target_currency: &str,
    ) -> CoreResult<ProcessedOrder> {
        let base_price = calculate_final_price(order, order.discount_service.as_deref())?;
        let source_currency = order
            .currency
            .clone()
            .unwrap_or_else(|| self.config.default_currency().to_string());

        debug!(
            base_price = %base_price,
            from = %source_currency,
            to = %target_currency,
            "Converting order price"
        );

        match self
            .convert(base_price.as_major(), &source_currency, target_currency)
            .await
        {
            Ok(amount) => Ok(ProcessedOrder {
                base_price,
                source_currency,
                amount,
                currency: target_currency.to_string(),
                outcome: ConversionOutcome::Converted,
            }),
            Err(err) => {
                warn!(
                    error = %err,
                    base_price = %base_price,
                    from = %source_currency,
                    to = %target_currency,
                    "Currency conversion failed, using base price"
                );
                Ok(ProcessedOrder {
                    base_price,
                    amount: base_price.as_major(),
                    currency: source_currency.clone(),
                    source_currency,
                    outcome: ConversionOutcome::DegradedToBase {
                        reason: err.to_string(),
                    },
                })
            }
        }
    }

    /// Calls the converter once, bounded by the configured timeout.
    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        let call = self.converter.convert(amount, from, to);

        match self.config.conversion_timeout() {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .unwrap_or(Err(ConversionError::Timeout(limit))),
            None => call.await,
        }
    }
}

impl std::fmt::Debug for OrderProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderProcessor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
