use crate::units::error::ParseError;
use crate::units::types::Unit;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Parse the text of the input field as a finite base-10 number.
///
/// Surrounding whitespace is ignored; sign, decimal point and exponent are accepted
/// (`"12.5"`, `"-3"`, `"1e3"`). Empty text, trailing garbage (`"12abc"`) and values
/// that are not finite (`"inf"`, `"NaN"`, `"1e400"`) are rejected.
pub fn parse_amount(raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::NotANumber(raw.to_string()));
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::NotANumber(raw.to_string())),
    }
}

/// Parse a unit name, symbol or plural, case-insensitively ("Metre", "meters", "ft")
pub fn parse_unit(raw: &str) -> Result<Unit, ParseError> {
    let name = raw.trim().to_lowercase();
    let unit = match name.as_str() {
        "metre" | "metres" | "meter" | "meters" | "m" => Unit::Metre,
        "millimetre" | "millimetres" | "millimeter" | "millimeters" | "mm" => Unit::Millimetre,
        "mile" | "miles" | "mi" => Unit::Mile,
        "foot" | "feet" | "ft" => Unit::Foot,
        _ => return Err(ParseError::UnknownUnit(raw.to_string())),
    };
    Ok(unit)
}

impl FromStr for Unit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_unit(s)
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        parse_unit(&name).map_err(serde::de::Error::custom)
    }
}
