use crate::error::{BudgetError, Result};
use log::debug;

/// Parse a field that must hold a number. Blank text counts as 0.
pub fn parse_required(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| BudgetError::invalid_number(field, text))
}

/// Parse a field on a best-effort basis: blank or unparseable text counts as 0
pub fn parse_or_zero(field: &str, text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            debug!("ignoring unparseable value {:?} in field `{}`", text, field);
            0.0
        }
    }
}

/// Parse a whole number of years, falling back to `default` when blank or not an integer.
///
/// Negative counts are accepted and clamp to 0 (an empty projection).
pub fn parse_years(text: &str, default: u32) -> u32 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return default;
    }
    match trimmed.parse::<i64>() {
        Ok(years) if years < 0 => 0,
        Ok(years) => u32::try_from(years).unwrap_or(default),
        Err(_) => {
            debug!("prediction years {:?} is not an integer, using {}", text, default);
            default
        }
    }
}
