//! Application configuration loading from environment variables.
//!
//! Values are read once at startup via `std::env::var`, after `.env` has been
//! loaded by the binary.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `RUST_LOG`: Logging filter (default: "info,waitlist=debug")
//! - `WAITLIST_PRODUCT_NAME`: Product named in the form heading (default: "Spidr Air Fryer")
//! - `WAITLIST_RESET_AFTER_SUBMIT`: Offer another signup after a successful one (default: false)
//! - `WAITLIST_LOG_JSON_PAYLOAD`: Log submissions as JSON rather than Debug output (default: true)

use serde::Deserialize;

use crate::presentation::terminal::TerminalOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Product named in the form heading and confirmation
    pub product_name: String,

    /// Policy for leaving the terminal `Submitted` state
    pub reset_after_submit: bool,

    /// Format of the payload written by the tracing sink
    pub log_json_payload: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            product_name: "Spidr Air Fryer".to_string(),
            reset_after_submit: false,
            log_json_payload: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            product_name: env_or(&lookup, "WAITLIST_PRODUCT_NAME", defaults.product_name)?,
            reset_after_submit: env_or(
                &lookup,
                "WAITLIST_RESET_AFTER_SUBMIT",
                defaults.reset_after_submit,
            )?,
            log_json_payload: env_or(&lookup, "WAITLIST_LOG_JSON_PAYLOAD", defaults.log_json_payload)?,
        })
    }

    pub fn terminal_options(&self) -> TerminalOptions {
        TerminalOptions {
            product_name: self.product_name.clone(),
            reset_after_submit: self.reset_after_submit,
        }
    }
}

/// Load a variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T, F>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        None => Ok(default),
    }
}
