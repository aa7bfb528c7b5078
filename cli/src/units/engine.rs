use crate::units::error::ParseError;
use crate::units::formatter;
use crate::units::parser;
use crate::units::table::{ConversionTable, FactorSet};
use crate::units::types::{ConversionRecord, ConversionRequest, Unit};

/// Parses, converts and formats length conversions against a fixed factor table.
///
/// The engine holds no state besides a reference to an immutable table, so it is
/// `Copy` and can be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct ConversionEngine {
    table: &'static ConversionTable,
}

impl ConversionEngine {
    pub fn new(set: FactorSet) -> Self {
        Self { table: set.table() }
    }

    pub fn table(&self) -> &'static ConversionTable {
        self.table
    }

    pub fn factor_set(&self) -> FactorSet {
        self.table.set()
    }

    pub fn parse_amount(&self, raw: &str) -> Result<f64, ParseError> {
        parser::parse_amount(raw)
    }

    /// Convert `amount` from `source` to `target`.
    /// Returns `amount` unchanged when both units are the same.
    pub fn convert(&self, amount: f64, source: Unit, target: Unit) -> f64 {
        if source == target {
            return amount;
        }
        amount * self.table.factor(source, target)
    }

    pub fn format_result(
        &self,
        original: &str,
        source: Unit,
        converted: f64,
        target: Unit,
    ) -> String {
        formatter::format_result(original, source, converted, target)
    }

    /// Run one convert action end to end
    pub fn run(&self, request: &ConversionRequest) -> Result<ConversionRecord, ParseError> {
        let amount = self.parse_amount(&request.input).map_err(|e| {
            log::warn!("Rejected conversion input: {}", e);
            e
        })?;

        let factor = self.table.factor(request.source, request.target);
        let value = self.convert(amount, request.source, request.target);
        let text = self.format_result(&request.input, request.source, value, request.target);

        log::debug!(
            "Converted {} {} -> {} {} (factor {}, {} table)",
            amount,
            request.source,
            value,
            request.target,
            factor,
            self.factor_set().name()
        );

        Ok(ConversionRecord {
            input: request.input.clone(),
            amount,
            source: request.source,
            target: request.target,
            factor,
            value,
            text,
        })
    }
}

impl Default for ConversionEngine {
    fn default() -> Self {
        Self::new(FactorSet::default())
    }
}
