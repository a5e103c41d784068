// Duration-based classification and gap-based segmentation rules.
//
// Both functions are pure: the decoder re-evaluates `should_finalize` on
// every tick because an idle channel produces no edges, so letter boundaries
// are only observable through elapsed wall-clock time.
use crate::types::{DurationMs, Symbol, TimestampMs};

/// Split an on-duration into dot or dash at the configured threshold.
///
/// The boundary itself classifies as a dash: strictly shorter is a dot.
pub fn classify(duration: DurationMs, dot_dash_threshold_ms: DurationMs) -> Symbol {
    if duration < dot_dash_threshold_ms {
        Symbol::Dot
    } else {
        Symbol::Dash
    }
}

/// Whether the pending letter should be finalized at this tick.
///
/// True only when there is something to finalize, the channel is idle, and
/// the gap since the last appended symbol has exceeded the letter gap.
pub fn should_finalize(
    now: TimestampMs,
    last_symbol_time: Option<TimestampMs>,
    channel_active: bool,
    pending_nonempty: bool,
    letter_gap_ms: DurationMs,
) -> bool {
    if !pending_nonempty || channel_active {
        return false;
    }
    match last_symbol_time {
        Some(last) => now.saturating_sub(last) > letter_gap_ms,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_below_threshold_is_dot() {
        assert_eq!(classify(0, 500), Symbol::Dot);
        assert_eq!(classify(499, 500), Symbol::Dot);
    }

    #[test]
    fn test_classify_threshold_boundary_is_dash() {
        assert_eq!(classify(500, 500), Symbol::Dash);
        assert_eq!(classify(501, 500), Symbol::Dash);
    }

    #[test]
    fn test_classify_respects_configured_threshold() {
        // The two observed field configurations split at different points
        assert_eq!(classify(450, 500), Symbol::Dot);
        assert_eq!(classify(450, 400), Symbol::Dash);
    }

    #[test]
    fn test_finalize_requires_gap_strictly_exceeded() {
        assert!(!should_finalize(1200, Some(0), false, true, 1200));
        assert!(should_finalize(1201, Some(0), false, true, 1200));
    }

    #[test]
    fn test_finalize_blocked_while_channel_active() {
        assert!(!should_finalize(5000, Some(0), true, true, 1200));
    }

    #[test]
    fn test_finalize_blocked_with_empty_pending() {
        assert!(!should_finalize(5000, Some(0), false, false, 1200));
        assert!(!should_finalize(5000, None, false, false, 1200));
    }
}
