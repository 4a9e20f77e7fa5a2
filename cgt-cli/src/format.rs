use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be read as a won amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("invalid amount '{0}': only digits, commas, a leading ₩ and a trailing 원 are allowed")]
    InvalidCharacter(String),

    #[error("amount '{0}' is too large")]
    TooLarge(String),
}

/// Parses a won amount as typed into a form, e.g. `"1,000,000원"` or `"₩ 25,000"`.
///
/// Thousands separators and the currency sign are dropped, and surrounding whitespace
/// is ignored. Empty input is treated as 0. Amounts are whole won, so signs, decimal
/// points and whitespace between digits are rejected.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let body = s.trim();
    let body = body.strip_prefix('₩').unwrap_or(body).trim_start();
    let body = body.strip_suffix('원').unwrap_or(body).trim_end();

    if let Some(c) = body.chars().find(|c| !c.is_ascii_digit() && *c != ',') {
        tracing::error!(input = %s, invalid = %c, "invalid amount");
        return Err(ParseAmountError::InvalidCharacter(s.to_string()));
    }

    let digits: String = body.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Ok(Decimal::ZERO);
    }
    digits.parse().map_err(|e| {
        tracing::error!(input = %s, "amount out of range: {}", e);
        ParseAmountError::TooLarge(s.to_string())
    })
}

/// Groups the whole-won part of `value` by thousands, e.g. `-9,670,000`.
pub fn format_number(value: Decimal) -> String {
    let whole = value.trunc().abs().to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 1);

    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if value.trunc().is_sign_negative() && !value.trunc().is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats a won amount for display, e.g. `1,000,000원`.
pub fn format_won(value: Decimal) -> String {
    format!("{}원", format_number(value))
}

/// Formats a rate in `[0, 1]` as a whole percentage, e.g. `0.8` → `80%`.
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).round_dp(0).normalize())
}
