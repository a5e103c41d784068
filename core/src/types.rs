use serde::{Deserialize, Serialize};

/// Milliseconds on the caller's monotonic clock.
pub type TimestampMs = u64;
/// Width of an interval between two timestamps, in milliseconds.
pub type DurationMs = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Dot,
    Dash,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        }
    }
}

/// A transition of the signal-presence flag, stamped by the edge detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Rising {
        at: TimestampMs,
    },
    Falling {
        at: TimestampMs,
        /// How long the signal was on, clamped to zero if the clock ran backwards.
        duration: DurationMs,
    },
}

/// One observation of the presence channel, delivered once per sampling tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub at_ms: TimestampMs,
    pub on: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecoderParams {
    /// On-durations shorter than this are dots; this long or longer, dashes.
    pub dot_dash_threshold_ms: DurationMs,
    /// Idle time after the last symbol that finalizes the pending letter.
    pub letter_gap_ms: DurationMs,
}

impl Default for DecoderParams {
    fn default() -> Self {
        Self {
            dot_dash_threshold_ms: 500,
            letter_gap_ms: 1200,
        }
    }
}

/// What one call to `submit_sample` changed, if anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickOutcome {
    pub symbol_appended: Option<Symbol>,
    pub letter_finalized: Option<char>,
}

/// Owned copy of the decoder's observable state, safe to hand to a
/// presentation layer running beside the decode loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoderSnapshot {
    pub pending: String,
    pub message: String,
    pub channel_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let params = DecoderParams::default();
        assert_eq!(params.dot_dash_threshold_ms, 500);
        assert_eq!(params.letter_gap_ms, 1200);
    }

    #[test]
    fn test_params_json_merge_over_defaults() {
        // Empty JSON - all defaults
        let params: DecoderParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.dot_dash_threshold_ms, 500);
        assert_eq!(params.letter_gap_ms, 1200);

        // Partial JSON - the GUI variant's faster dot/dash split
        let params: DecoderParams = serde_json::from_str(r#"{"dotDashThresholdMs": 400}"#).unwrap();
        assert_eq!(params.dot_dash_threshold_ms, 400);
        assert_eq!(params.letter_gap_ms, 1200); // default
    }

    #[test]
    fn test_symbol_as_char() {
        assert_eq!(Symbol::Dot.as_char(), '.');
        assert_eq!(Symbol::Dash.as_char(), '-');
    }

    #[test]
    fn test_sample_json_shape() {
        let sample: Sample = serde_json::from_str(r#"{"atMs": 120, "on": true}"#).unwrap();
        assert_eq!(sample.at_ms, 120);
        assert!(sample.on);
    }
}
