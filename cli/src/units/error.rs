use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Text does not parse to a finite number
    NotANumber(String),
    /// Text does not name one of the supported units
    UnknownUnit(String),
    /// Free-form query is not of the form "<amount> <unit> to <unit>"
    InvalidExpression(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NotANumber(input) => {
                write!(f, "Please enter a valid number (got '{}')", input)
            }
            ParseError::UnknownUnit(input) => write!(f, "Unknown unit: '{}'", input),
            ParseError::InvalidExpression(input) => {
                write!(
                    f,
                    "Invalid expression '{}': expected '<amount> <unit> to <unit>'",
                    input
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
