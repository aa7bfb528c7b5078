// WebAssembly bindings for the converter screen
use crate::config::Config;
use crate::session::ConverterSession;
use crate::units::{self, ConversionRequest, Unit};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ConverterWasm {
    session: ConverterSession,
}

fn parse_unit(name: &str) -> Result<Unit, JsValue> {
    units::parse_unit(name).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
impl ConverterWasm {
    /// Create a converter, optionally from the contents of a converter.toml
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<ConverterWasm, JsValue> {
        let config = match config_content {
            Some(content) => Config::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Config::empty(),
        };

        Ok(Self {
            session: config.session(),
        })
    }

    /// Unit labels in selector order
    #[wasm_bindgen]
    pub fn units(&self) -> js_sys::Array {
        Unit::ALL
            .iter()
            .map(|unit| JsValue::from_str(unit.label()))
            .collect()
    }

    /// Convert once without touching the session.
    /// Returns the formatted result or throws the error message.
    #[wasm_bindgen]
    pub fn convert(&self, input: &str, from: &str, to: &str) -> Result<String, JsValue> {
        let request = ConversionRequest::new(input, parse_unit(from)?, parse_unit(to)?);
        self.session
            .engine()
            .run(&request)
            .map(|record| record.text)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Same as `convert` but returns the full record as a JSON string
    #[wasm_bindgen]
    pub fn convert_json(&self, input: &str, from: &str, to: &str) -> Result<String, JsValue> {
        let request = ConversionRequest::new(input, parse_unit(from)?, parse_unit(to)?);
        let record = self
            .session
            .engine()
            .run(&request)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&record)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    #[wasm_bindgen]
    pub fn set_input(&mut self, input: &str) {
        self.session.set_input(input);
    }

    #[wasm_bindgen]
    pub fn set_source(&mut self, unit: &str) -> Result<(), JsValue> {
        self.session.set_source(parse_unit(unit)?);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_target(&mut self, unit: &str) -> Result<(), JsValue> {
        self.session.set_target(parse_unit(unit)?);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn source(&self) -> String {
        self.session.source().label().to_string()
    }

    #[wasm_bindgen]
    pub fn target(&self) -> String {
        self.session.target().label().to_string()
    }

    /// Convert the session's current input; throws on invalid input and clears
    /// the displayed result
    #[wasm_bindgen]
    pub fn submit(&mut self) -> Result<String, JsValue> {
        self.session
            .submit()
            .map(|record| record.text)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Text to show under the button, if any
    #[wasm_bindgen]
    pub fn result(&self) -> Option<String> {
        self.session.result().map(str::to_string)
    }
}
