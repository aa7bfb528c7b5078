use serde::Serialize;
use std::fmt;

/// A supported length unit
///
/// Serializes as the lowercase label ("metre"); deserializes from any name
/// accepted by [`parse_unit`](crate::units::parser::parse_unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Metre,
    Millimetre,
    Mile,
    Foot,
}

impl Unit {
    /// Every unit, in the order a selector lists them
    pub const ALL: [Unit; 4] = [Unit::Metre, Unit::Millimetre, Unit::Mile, Unit::Foot];

    /// Row/column of this unit in a conversion table
    pub const fn index(self) -> usize {
        match self {
            Unit::Metre => 0,
            Unit::Millimetre => 1,
            Unit::Mile => 2,
            Unit::Foot => 3,
        }
    }

    /// Display name used in result strings (e.g. "Metre")
    pub const fn label(self) -> &'static str {
        match self {
            Unit::Metre => "Metre",
            Unit::Millimetre => "Millimetre",
            Unit::Mile => "Mile",
            Unit::Foot => "Foot",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Metre => "m",
            Unit::Millimetre => "mm",
            Unit::Mile => "mi",
            Unit::Foot => "ft",
        }
    }

    /// Length of one of this unit in metres, by SI definition
    pub const fn metres(self) -> f64 {
        match self {
            Unit::Metre => 1.0,
            Unit::Millimetre => 1e-3,
            Unit::Mile => 1_609.344,
            Unit::Foot => 0.3048,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single convert action as entered by the user
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    /// Raw text from the input field, kept verbatim for display
    pub input: String,
    pub source: Unit,
    pub target: Unit,
}

impl ConversionRequest {
    pub fn new(input: impl Into<String>, source: Unit, target: Unit) -> Self {
        Self {
            input: input.into(),
            source,
            target,
        }
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionRecord {
    /// Raw text as entered
    pub input: String,
    /// Parsed amount in the source unit
    pub amount: f64,
    pub source: Unit,
    pub target: Unit,
    /// Factor applied (`value = amount * factor`)
    pub factor: f64,
    pub value: f64,
    /// Formatted "<input> <source> = <value> <target>" line
    pub text: String,
}
