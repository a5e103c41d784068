// WebAssembly bindings wrapping the streaming decoder for the browser UI
use js_sys::Array;
use morse_rx_core::decoder::Decoder;
use morse_rx_core::types::{DecoderParams, Sample, Symbol};
use wasm_bindgen::prelude::*;

mod support;

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

/// Stateful decoder handle for the JavaScript presentation layer.
///
/// The UI drives it once per video frame: `submit_sample` with the frame's
/// timestamp and the blob detector's presence flag, then reads `snapshot` to
/// draw the pending symbols, the message, and the in-progress pulse bar.
#[wasm_bindgen]
pub struct BlinkDecoder {
    inner: Decoder,
}

#[wasm_bindgen]
impl BlinkDecoder {
    /// Create a decoder from a JSON config; missing keys fall back to
    /// defaults (500ms dot/dash split, 1200ms letter gap).
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> BlinkDecoder {
        let params = support::parse_with_defaults::<DecoderParams>(config_json);
        BlinkDecoder {
            inner: Decoder::new(params),
        }
    }

    /// Feed one presence sample. Returns the tick outcome as a JS object:
    /// `{ symbolAppended, letterFinalized }`, both nullable.
    pub fn submit_sample(&mut self, at_ms: f64, on: bool) -> Result<JsValue, JsValue> {
        let outcome = self.inner.submit_sample(at_ms.max(0.0) as u64, on);
        serde_wasm_bindgen::to_value(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Clear the pending sequence and decoded message (the 'c' key of the
    /// original dashboard). Leaves an in-progress pulse timed correctly.
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
            .map(|s| match s {
                Symbol::Dot => JsValue::from_str("dot"),
                Symbol::Dash => JsValue::from_str("dash"),
            })
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

    /// Elapsed milliseconds of the pulse currently on, or undefined when idle.
    pub fn current_pulse_ms(&self, now_ms: f64) -> Option<f64> {
        self.inner
            .current_pulse_ms(now_ms.max(0.0) as u64)
            .map(|d| d as f64)
    }

    /// Consistent copy of the display state:
    /// `{ pending, message, channelActive }`.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Decode a recorded JSON array of `{atMs, on}` samples in one call.
#[wasm_bindgen]
pub fn decode_samples(samples_json: &str, config_json: &str) -> Result<String, JsValue> {
    let samples: Vec<Sample> = serde_json::from_str(samples_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid samples JSON: {}", e)))?;

    let params = support::parse_with_defaults::<DecoderParams>(config_json);
    Ok(morse_rx_core::decode_samples(&samples, &params))
}
