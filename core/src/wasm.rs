// WebAssembly bindings exposing the decoder to a browser presentation layer
use crate::decoder::Decoder;
use crate::types::{DecoderParams, Sample};
use js_sys::Array;
use wasm_bindgen::prelude::*;

// Console logging for debugging
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[allow(unused_macros)]
macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

fn parse_params(config_json: &str) -> DecoderParams {
    if config_json.trim().is_empty() || config_json == "{}" {
        DecoderParams::default()
    } else {
        serde_json::from_str::<DecoderParams>(config_json).unwrap_or_default()
    }
}

/// Stateful decoder handle for JavaScript callers.
///
/// Timestamps come in as `f64` milliseconds (what `performance.now()`
/// produces); negative values clamp to zero.
#[wasm_bindgen]
pub struct MorseDecoder {
    inner: Decoder,
}

#[wasm_bindgen]
impl MorseDecoder {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> MorseDecoder {
        MorseDecoder {
            inner: Decoder::new(parse_params(config_json)),
        }
    }

    /// Feed one presence sample; returns true if the decoded message grew.
    pub fn submit_sample(&mut self, at_ms: f64, on: bool) -> bool {
        let outcome = self.inner.submit_sample(at_ms.max(0.0) as u64, on);
        outcome.letter_finalized.is_some()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn pending(&self) -> String {
        self.inner.pending()
    }

    #[wasm_bindgen(getter)]
    pub fn pending_symbols(&self) -> Array {
        self.inner
            .pending_symbols()
            .iter()
            .map(|s| JsValue::from_str(match s {
                crate::types::Symbol::Dot => "dot",
                crate::types::Symbol::Dash => "dash",
            }))
            .collect()
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.inner.message().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    /// Elapsed milliseconds of the in-progress pulse, or undefined when idle.
    pub fn current_pulse_ms(&self, now_ms: f64) -> Option<f64> {
        self.inner
            .current_pulse_ms(now_ms.max(0.0) as u64)
            .map(|d| d as f64)
    }
}

/// Decode a JSON array of `{atMs, on}` samples in one call.
#[wasm_bindgen]
pub fn decode_sample_batch(samples_json: &str, config_json: &str) -> Result<String, JsValue> {
    let samples: Vec<Sample> = serde_json::from_str(samples_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid samples JSON: {}", e)))?;

    let params = parse_params(config_json);
    Ok(crate::decode_samples(&samples, &params))
}
