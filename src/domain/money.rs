use std::fmt;

/// Room rates are whole currency units, e.g. 15000 = 15000 Ft.
pub type Rate = i64;

/// Currency label used when a catalog does not specify one.
pub const DEFAULT_CURRENCY: &str = "Ft";

/// Format a rate with its currency label.
/// Example: (15000, "Ft") -> "15000 Ft"
pub fn format_rate(rate: Rate, currency: &str) -> String {
    format!("{} {}", rate, currency)
}

/// Parse a positive whole-unit rate.
/// Example: "15000" -> 15000, " 800 " -> 800
pub fn parse_rate(input: &str) -> Result<Rate, ParseRateError> {
    let input = input.trim();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseRateError::InvalidFormat);
    }

    let rate: Rate = input.parse().map_err(|_| ParseRateError::InvalidFormat)?;
    if rate == 0 {
        return Err(ParseRateError::NotPositive);
    }
    Ok(rate)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseRateError {
    InvalidFormat,
    NotPositive,
}

impl fmt::Display for ParseRateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseRateError::InvalidFormat => write!(f, "invalid rate format"),
            ParseRateError::NotPositive => write!(f, "rate must be positive"),
        }
    }
}

impl std::error::Error for ParseRateError {}
