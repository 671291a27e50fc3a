//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`COSMIC_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::PathBuf;

use cosmic_core::Money;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in the header
    pub store_name: String,

    /// Currency symbol, printed after the amount
    pub currency_symbol: String,

    /// Thousands separator used when formatting prices
    pub thousands_separator: String,

    /// Catalog JSON file. `None` means the built-in sample catalog.
    pub catalog_path: Option<PathBuf>,

    /// Show "added to cart" notifications
    pub notifications_enabled: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Cosmic Store"
    /// - Currency: ₽, grouped with ","
    /// - Catalog: built-in sample
    /// - Notifications: enabled
    fn default() -> Self {
        ConfigState {
            store_name: "Cosmic Store".to_string(),
            currency_symbol: "₽".to_string(),
            thousands_separator: ",".to_string(),
            catalog_path: None,
            notifications_enabled: true,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `COSMIC_STORE_NAME`
    /// - `COSMIC_CURRENCY_SYMBOL`
    /// - `COSMIC_THOUSANDS_SEPARATOR`
    /// - `COSMIC_CATALOG_PATH`
    /// - `COSMIC_NOTIFICATIONS` (`0`, `false`, `off` or `no` disables)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("COSMIC_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("COSMIC_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(separator) = lookup("COSMIC_THOUSANDS_SEPARATOR") {
            config.thousands_separator = separator;
        }

        if let Some(path) = lookup("COSMIC_CATALOG_PATH").filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(flag) = lookup("COSMIC_NOTIFICATIONS") {
            config.notifications_enabled = !matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            );
        }

        config
    }

    /// Formats an amount for display, e.g. `5,998 ₽`.
    pub fn format_price(&self, amount: Money) -> String {
        format!(
            "{} {}",
            amount.format_grouped(&self.thousands_separator),
            self.currency_symbol
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ConfigState::from_lookup(|_| None);
        assert_eq!(config, ConfigState::default());
        assert!(config.catalog_path.is_none());
        assert!(config.notifications_enabled);
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("COSMIC_STORE_NAME", "Lunar Shop"),
            ("COSMIC_CURRENCY_SYMBOL", "€"),
            ("COSMIC_THOUSANDS_SEPARATOR", " "),
            ("COSMIC_CATALOG_PATH", "/srv/catalog.json"),
            ("COSMIC_NOTIFICATIONS", "off"),
        ]));

        assert_eq!(config.store_name, "Lunar Shop");
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.thousands_separator, " ");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/catalog.json")));
        assert!(!config.notifications_enabled);
    }

    #[test]
    fn test_blank_catalog_path_ignored() {
        let config = ConfigState::from_lookup(lookup_from(&[("COSMIC_CATALOG_PATH", "  ")]));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_notifications_flag_values() {
        for off in ["0", "false", "FALSE", "no"] {
            let config = ConfigState::from_lookup(lookup_from(&[("COSMIC_NOTIFICATIONS", off)]));
            assert!(!config.notifications_enabled, "{off} should disable");
        }
        let config = ConfigState::from_lookup(lookup_from(&[("COSMIC_NOTIFICATIONS", "1")]));
        assert!(config.notifications_enabled);
    }

    #[test]
    fn test_format_price() {
        let config = ConfigState::default();
        assert_eq!(config.format_price(Money::from_units(5998)), "5,998 ₽");
        assert_eq!(config.format_price(Money::from_units(0)), "0 ₽");
        assert_eq!(config.format_price(Money::from_units(999)), "999 ₽");
    }
}
