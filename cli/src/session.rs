// State held by the screen between user actions: the input text, both
// selectors and the last displayed result.

use crate::units::{ConversionEngine, ConversionRecord, ConversionRequest, ParseError, Unit};

pub const DEFAULT_SOURCE: Unit = Unit::Metre;
pub const DEFAULT_TARGET: Unit = Unit::Millimetre;

#[derive(Debug, Clone)]
pub struct ConverterSession {
    engine: ConversionEngine,
    input: String,
    source: Unit,
    target: Unit,
    result: Option<String>,
}

impl ConverterSession {
    pub fn new(engine: ConversionEngine) -> Self {
        Self::with_units(engine, DEFAULT_SOURCE, DEFAULT_TARGET)
    }

    pub fn with_units(engine: ConversionEngine, source: Unit, target: Unit) -> Self {
        Self {
            engine,
            input: String::new(),
            source,
            target,
            result: None,
        }
    }

    pub fn engine(&self) -> ConversionEngine {
        self.engine
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn source(&self) -> Unit {
        self.source
    }

    pub fn target(&self) -> Unit {
        self.target
    }

    /// Last successful result text, if any
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn set_source(&mut self, unit: Unit) {
        self.source = unit;
    }

    pub fn set_target(&mut self, unit: Unit) {
        self.target = unit;
    }

    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }

    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(self.input.clone(), self.source, self.target)
    }

    /// Convert the current input. A rejected input clears the previous result
    /// so a stale value is never shown next to the error.
    pub fn submit(&mut self) -> Result<ConversionRecord, ParseError> {
        match self.engine.run(&self.request()) {
            Ok(record) => {
                self.result = Some(record.text.clone());
                Ok(record)
            }
            Err(e) => {
                self.result = None;
                Err(e)
            }
        }
    }
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new(ConversionEngine::default())
    }
}
