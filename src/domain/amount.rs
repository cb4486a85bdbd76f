use std::fmt;

/// Amounts are stored as plain floating-point values in whatever currency
/// unit the user means by them. A currency symbol is attached at display
/// time only; the store never sees one.
pub type Amount = f64;

/// Format an amount with two decimal places.
/// Example: 12.5 -> "12.50", -3.0 -> "-3.00"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}

/// Parse user-entered text into an amount.
///
/// This is the validation boundary: free-text input that is not a finite
/// number is rejected here and never reaches the store. Sign and magnitude
/// are otherwise unconstrained (negative amounts record refunds).
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let amount: f64 = input.parse().map_err(|_| ParseAmountError::NotANumber)?;

    // "nan"/"inf" parse as f64 but would poison every SUM aggregate
    if !amount.is_finite() {
        return Err(ParseAmountError::NotFinite);
    }

    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    NotANumber,
    NotFinite,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "amount is empty"),
            ParseAmountError::NotANumber => write!(f, "amount must be a number"),
            ParseAmountError::NotFinite => write!(f, "amount must be a finite number"),
        }
    }
}

impl std::error::Error for ParseAmountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(50.0), "50.00");
        assert_eq!(format_amount(12.345), "12.35");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-5.0), "-5.00");
        assert_eq!(format_amount(-0.015), "-0.01");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("50.00"), Ok(50.0));
        assert_eq!(parse_amount("50"), Ok(50.0));
        assert_eq!(parse_amount("12.5"), Ok(12.5));
        assert_eq!(parse_amount(".50"), Ok(0.5));
        assert_eq!(parse_amount("-20.5"), Ok(-20.5));
        assert_eq!(parse_amount("  7.25  "), Ok(7.25));
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert_eq!(parse_amount(""), Err(ParseAmountError::Empty));
        assert_eq!(parse_amount("   "), Err(ParseAmountError::Empty));
        assert_eq!(parse_amount("abc"), Err(ParseAmountError::NotANumber));
        assert_eq!(parse_amount("12,50"), Err(ParseAmountError::NotANumber));
        assert_eq!(parse_amount("nan"), Err(ParseAmountError::NotFinite));
        assert_eq!(parse_amount("inf"), Err(ParseAmountError::NotFinite));
    }
}
