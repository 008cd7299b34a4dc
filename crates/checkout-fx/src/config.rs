//! # Processor Configuration
//!
//! Configuration management for the order processor.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CHECKOUT_DEFAULT_CURRENCY=EUR                                      │
//! │     CHECKOUT_CONVERSION_TIMEOUT_MS=2000                                │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/checkout/checkout.toml (Linux)                           │
//! │     ~/Library/Application Support/com.checkout.pricing/checkout.toml   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     default_currency = "USD", no timeout                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # checkout.toml
//! [conversion]
//! default_currency = "USD"  # used when an order carries no currency
//! timeout_ms = 2000         # omit to wait for the converter indefinitely
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use checkout_core::validation::validate_currency_code;

use crate::error::{FxError, FxResult};

const CONFIG_FILE_NAME: &str = "checkout.toml";

// =============================================================================
// Conversion Settings
// =============================================================================

/// Settings for the currency conversion step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSettings {
    /// Source currency passed to the converter when an order has none.
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Upper bound on a single converter call (milliseconds).
    /// When it elapses the processor degrades to the base price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for ConversionSettings {
    fn default() -> Self {
        ConversionSettings {
            default_currency: default_currency(),
            timeout_ms: None,
        }
    }
}

// =============================================================================
// Processor Config
// =============================================================================

/// Complete order processor configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    #[serde(default)]
    pub conversion: ConversionSettings,
}

impl ProcessorConfig {
    /// Creates a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the currency assumed for orders without one.
    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.conversion.default_currency = currency.into();
        self
    }

    /// Bounds every converter call by `timeout`.
    ///
    /// Stored in whole milliseconds: sub-millisecond remainders round up and
    /// durations beyond `u64::MAX` ms saturate. Only `Duration::ZERO` maps to
    /// 0, which `validate` rejects.
    pub fn with_conversion_timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_nanos().div_ceil(1_000_000);
        self.conversion.timeout_ms = Some(u64::try_from(millis).unwrap_or(u64::MAX));
        self
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (checkout.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> FxResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading processor config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load processor config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses configuration from TOML text without env overrides.
    pub fn from_toml_str(contents: &str) -> FxResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> FxResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| FxError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| FxError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| FxError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Processor config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> FxResult<()> {
        validate_currency_code(&self.conversion.default_currency)?;

        if self.conversion.timeout_ms == Some(0) {
            return Err(FxError::InvalidConfig(
                "timeout_ms must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(currency) = std::env::var("CHECKOUT_DEFAULT_CURRENCY") {
            debug!(currency = %currency, "Overriding default currency from environment");
            self.conversion.default_currency = currency;
        }

        if let Ok(timeout) = std::env::var("CHECKOUT_CONVERSION_TIMEOUT_MS") {
            match timeout.parse::<u64>() {
                Ok(ms) => {
                    debug!(timeout_ms = ms, "Overriding conversion timeout from environment");
                    self.conversion.timeout_ms = Some(ms);
                }
                Err(_) => warn!(value = %timeout, "Ignoring non-numeric conversion timeout"),
            }
        }
    }

    /// Returns the platform-specific config path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "checkout", "pricing")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Currency assumed for orders without one.
    pub fn default_currency(&self) -> &str {
        &self.conversion.default_currency
    }

    /// Per-call converter timeout, if any.
    pub fn conversion_timeout(&self) -> Option<Duration> {
        self.conversion.timeout_ms.map(Duration::from_millis)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
