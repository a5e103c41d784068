// Streaming Morse decoder for an on/off keyed optical channel.
// The sensing pipeline (camera capture, blob detection) and all rendering
// live outside this crate; it consumes timestamped presence samples only.

pub mod decoder;
pub mod edge;
pub mod patterns;
pub mod timing;
pub mod types;

// Re-export main public API
pub use decoder::Decoder;
pub use edge::EdgeDetector;
pub use patterns::{lookup, resolve, UNRECOGNIZED};
pub use timing::{classify, should_finalize};
pub use types::*;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::*;

/// Decode a finite batch of presence samples in one call.
///
/// The stream end is treated as signal-off, and a final tick past the letter
/// gap flushes the trailing letter. Useful for tests and offline replay; live
/// callers should drive a [`Decoder`] tick by tick instead.
pub fn decode_samples(samples: &[Sample], params: &DecoderParams) -> String {
    let mut decoder = Decoder::new(params.clone());
    let mut last_at = 0;
    for sample in samples {
        decoder.submit_sample(sample.at_ms, sample.on);
        last_at = sample.at_ms;
    }
    decoder.submit_sample(last_at, false);
    decoder.submit_sample(last_at + params.letter_gap_ms + 1, false);
    decoder.message().to_string()
}
