// Decoder state machine: owns the accumulating decode state and runs the
// per-tick algorithm over edge events and elapsed time.
use crate::edge::EdgeDetector;
use crate::patterns;
use crate::timing::{classify, should_finalize};
use crate::types::{
    DecoderParams, DecoderSnapshot, DurationMs, Edge, Symbol, TickOutcome, TimestampMs,
};

/// Streaming Morse decoder.
///
/// Feed it one `(timestamp, presence)` sample per tick via
/// [`submit_sample`](Decoder::submit_sample); query the pending symbol
/// sequence and the decoded message at any time. Samples must arrive in
/// non-decreasing timestamp order; a backwards step clamps the affected
/// duration to zero instead of failing.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    params: DecoderParams,
    edges: EdgeDetector,
    pending: Vec<Symbol>,
    message: String,
    last_symbol_time: Option<TimestampMs>,
}

impl Decoder {
    pub fn new(params: DecoderParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn params(&self) -> &DecoderParams {
        &self.params
    }

    /// Process one sampling tick.
    ///
    /// A falling edge classifies the finished pulse and appends a symbol; the
    /// letter-gap check then runs against this tick's timestamp regardless of
    /// whether an edge occurred, since finalization is driven by elapsed idle
    /// time rather than by events.
    pub fn submit_sample(&mut self, at: TimestampMs, presence: bool) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if let Some(Edge::Falling { at: fell_at, duration }) = self.edges.observe(at, presence) {
            let symbol = classify(duration, self.params.dot_dash_threshold_ms);
            self.pending.push(symbol);
            self.last_symbol_time = Some(fell_at);
            outcome.symbol_appended = Some(symbol);
        }

        if should_finalize(
            at,
            self.last_symbol_time,
            self.edges.is_active(),
            !self.pending.is_empty(),
            self.params.letter_gap_ms,
        ) {
            let ch = patterns::resolve(&self.pending);
            self.message.push(ch);
            self.pending.clear();
            outcome.letter_finalized = Some(ch);
        }

        outcome
    }

    /// Clear the pending sequence and the decoded message.
    ///
    /// Idempotent. Channel state is untouched: a pulse in progress across a
    /// reset is still timed from its original rising edge.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.message.clear();
        self.last_symbol_time = None;
    }

    pub fn pending_symbols(&self) -> &[Symbol] {
        &self.pending
    }

    /// The in-progress sequence rendered as dots and dashes.
    pub fn pending(&self) -> String {
        self.pending.iter().map(|s| s.as_char()).collect()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_active(&self) -> bool {
        self.edges.is_active()
    }

    /// Elapsed time of the pulse currently on, for live display.
    pub fn current_pulse_ms(&self, now: TimestampMs) -> Option<DurationMs> {
        self.edges.current_pulse_ms(now)
    }

    /// Consistent owned copy of everything a display needs this frame.
    pub fn snapshot(&self) -> DecoderSnapshot {
        DecoderSnapshot {
            pending: self.pending(),
            message: self.message.clone(),
            channel_active: self.edges.is_active(),
        }
    }
}
