// Length units, conversion table and the conversion engine

pub mod detector;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod table;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

pub use detector::{looks_like_conversion, parse_expression};
pub use engine::ConversionEngine;
pub use error::ParseError;
pub use formatter::{format_number, format_result};
pub use parser::{parse_amount, parse_unit};
pub use table::{ConversionTable, FactorSet};
pub use types::{ConversionRecord, ConversionRequest, Unit};
pub use validation::ValidationResult;
