use crate::units::error::ParseError;
use crate::units::parser::{parse_amount, parse_unit};
use crate::units::types::ConversionRequest;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect conversion queries
    /// Matches: amount + whitespace + unit + "to" / "in" / "->" + unit
    /// Examples: "12.5 mile to ft", "3 m in feet", "-1e3 mm -> m"
    static ref CONVERSION_PATTERN: Regex = Regex::new(
        r"(?i)^\s*(?P<amount>\S+)\s+(?P<source>\S+)\s+(?:to|in|->)\s+(?P<target>\S+)\s*$"
    ).unwrap();
}

/// Check if a string has the shape of a conversion query
pub fn looks_like_conversion(s: &str) -> bool {
    CONVERSION_PATTERN.is_match(s)
}

/// Parse "<amount> <unit> to <unit>" into a request.
///
/// The amount text is kept verbatim as the request input.
pub fn parse_expression(s: &str) -> Result<ConversionRequest, ParseError> {
    let caps = CONVERSION_PATTERN
        .captures(s)
        .ok_or_else(|| ParseError::InvalidExpression(s.trim().to_string()))?;

    let amount = &caps["amount"];
    parse_amount(amount)?;
    let source = parse_unit(&caps["source"])?;
    let target = parse_unit(&caps["target"])?;

    Ok(ConversionRequest::new(amount, source, target))
}
