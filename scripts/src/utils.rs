//! Utilities for the deploy scripts

use alloy::primitives::{
    utils::{format_ether, parse_ether},
    U256,
};
use tracing::info;

use crate::constants::BANNER_WIDTH;

/// Parse a decimal amount of whole tokens (18 decimals), e.g. `"1000.5"`.
///
/// # Errors
///
/// Fails if `s` is not a non-negative decimal number with at most 18
/// fractional digits.
pub fn parse_tokens(s: &str) -> Result<U256, String> {
    if s.trim_start().starts_with('-') {
        return Err(format!("invalid token amount `{s}`: negative"));
    }
    parse_ether(s).map_err(|e| format!("invalid token amount `{s}`: {e}"))
}

/// Format a raw amount as whole tokens without trailing zeros, keeping one
/// fractional digit (`1000000.0`, `0.5`).
#[must_use]
pub fn format_tokens(value: U256) -> String {
    let formatted = format_ether(value);
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            let fraction = if fraction.is_empty() { "0" } else { fraction };
            format!("{whole}.{fraction}")
        }
        None => format!("{formatted}.0"),
    }
}

/// Log a banner line.
pub fn log_separator() {
    info!("{}", "=".repeat(BANNER_WIDTH));
}
