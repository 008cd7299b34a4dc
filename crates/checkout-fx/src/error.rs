//! # Conversion Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       checkout-fx Error Categories                      │
//! │                                                                         │
//! │  ┌─────────────────────────────┐  ┌─────────────────────────────────┐  │
//! │  │  ConversionError            │  │  FxError                        │  │
//! │  │  (raised by converters)     │  │  (caller-visible)               │  │
//! │  │                             │  │                                 │  │
//! │  │  Failed                     │  │  InvalidConfig                  │  │
//! │  │  UnsupportedPair            │  │  ConfigLoadFailed               │  │
//! │  │  Timeout                    │  │  ConfigSaveFailed               │  │
//! │  │                             │  │  Core (pricing rejection)       │  │
//! │  │  Always recovered by the    │  │                                 │  │
//! │  │  processor: base price wins │  │                                 │  │
//! │  └─────────────────────────────┘  └─────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use checkout_core::CoreError;
use thiserror::Error;

/// Result type alias for processor setup and configuration.
pub type FxResult<T> = Result<T, FxError>;

// =============================================================================
// Conversion Error
// =============================================================================

/// Failure reported by a [`CurrencyConverter`](crate::CurrencyConverter).
///
/// Never reaches callers of `OrderProcessor::process_order`; the processor
/// logs it and returns the base price instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The converter failed for its own reasons (network, provider, ...).
    #[error("Conversion failed: {0}")]
    Failed(String),

    /// The converter has no rate for this pair.
    #[error("No rate from {from} to {to}")]
    UnsupportedPair { from: String, to: String },

    /// The converter did not answer within the configured timeout.
    #[error("Conversion timed out after {0:?}")]
    Timeout(Duration),
}

impl ConversionError {
    /// Shorthand for [`ConversionError::Failed`].
    pub fn failed(reason: impl Into<String>) -> Self {
        ConversionError::Failed(reason.into())
    }
}

// =============================================================================
// Processor Error
// =============================================================================

/// Errors surfaced by configuration handling.
#[derive(Debug, Error)]
pub enum FxError {
    /// Invalid processor configuration.
    #[error("Invalid processor configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// Pricing rejected the order or a configured value.
    #[error(transparent)]
    Core(#[from] CoreError),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for FxError {
    fn from(err: std::io::Error) -> Self {
        FxError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for FxError {
    fn from(err: toml::de::Error) -> Self {
        FxError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for FxError {
    fn from(err: toml::ser::Error) -> Self {
        FxError::ConfigSaveFailed(err.to_string())
    }
}

impl From<checkout_core::ValidationError> for FxError {
    fn from(err: checkout_core::ValidationError) -> Self {
        FxError::Core(CoreError::Validation(err))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_messages() {
        assert_eq!(
            ConversionError::failed("Conversion failed").to_string(),
            "Conversion failed: Conversion failed"
        );
        let err = ConversionError::UnsupportedPair {
            from: "USD".into(),
            to: "XTS".into(),
        };
        assert_eq!(err.to_string(), "No rate from USD to XTS");
        assert_eq!(
            ConversionError::Timeout(Duration::from_millis(250)).to_string(),
            "Conversion timed out after 250ms"
        );
    }

    #[test]
    fn test_core_error_passes_through() {
        let err: FxError = CoreError::InvalidOrder.into();
        assert_eq!(err.to_string(), "Invalid order");
    }

    #[test]
    fn test_toml_error_is_load_failure() {
        let err: FxError = toml::from_str::<toml::Value>("= broken").unwrap_err().into();
        assert!(matches!(err, FxError::ConfigLoadFailed(_)));
    }
}
