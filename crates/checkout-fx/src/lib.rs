//! # checkout-fx: Currency Conversion for Checkout Pricing
//!
//! Adds the one asynchronous step of the pricing flow: converting an order's
//! base price into the customer's currency, falling back to the base price
//! when conversion fails.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Order ──► checkout_core::calculate_final_price ──► base price          │
//! │                                                          │              │
//! │                                                          ▼              │
//! │                       CurrencyConverter::convert(amount, from, to)      │
//! │                                                          │              │
//! │                                   ┌──────────────────────┴─────┐        │
//! │                                   ▼                            ▼        │
//! │                              Ok(v) → v               Err / timeout →    │
//! │                                                      base price         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`processor`] - `OrderProcessor` and its outcome types
//! - [`converter`] - The `CurrencyConverter` capability
//! - [`config`] - Processor configuration (default currency, timeout)
//! - [`error`] - Conversion and configuration errors
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use checkout_fx::{OrderProcessor, ProcessorConfig};
//!
//! let config = ProcessorConfig::load_or_default(None);
//! let processor = OrderProcessor::with_config(Arc::new(rates_client), config)?;
//!
//! let quoted = processor.process_order(&order, "EUR").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod converter;
pub mod error;
pub mod processor;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConversionSettings, ProcessorConfig};
pub use converter::CurrencyConverter;
pub use error::{ConversionError, FxError, FxResult};
pub use processor::{ConversionOutcome, OrderProcessor, ProcessedOrder};
