// Rising/falling edge detection over the sampled presence flag.
use crate::types::{DurationMs, Edge, TimestampMs};

/// Channel activity, with the pulse start time carried only while active so
/// an "active since" without an active channel cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Inactive,
    Active { since: TimestampMs },
}

/// Watches consecutive presence samples and reports transitions.
///
/// The very first sample only seeds the channel state; there is no prior
/// sample to transition from, so no edge is emitted for it.
#[derive(Debug, Clone, Default)]
pub struct EdgeDetector {
    channel: Option<Channel>,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample; returns the edge this sample produced, if any.
    ///
    /// Timestamps are expected in non-decreasing order. If the clock does run
    /// backwards across a pulse, the reported duration clamps to zero rather
    /// than failing.
    pub fn observe(&mut self, at: TimestampMs, presence: bool) -> Option<Edge> {
        match (self.channel, presence) {
            (None, true) => {
                self.channel = Some(Channel::Active { since: at });
                None
            }
            (None, false) => {
                self.channel = Some(Channel::Inactive);
                None
            }
            (Some(Channel::Inactive), true) => {
                self.channel = Some(Channel::Active { since: at });
                Some(Edge::Rising { at })
            }
            (Some(Channel::Active { since }), false) => {
                self.channel = Some(Channel::Inactive);
                Some(Edge::Falling {
                    at,
                    duration: at.saturating_sub(since),
                })
            }
            // Same presence as the previous sample: nothing to report.
            (Some(_), _) => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.channel, Some(Channel::Active { .. }))
    }

    /// Elapsed time of the in-progress pulse, for live display while the
    /// signal is still on. `None` whenever the channel is inactive.
    pub fn current_pulse_ms(&self, now: TimestampMs) -> Option<DurationMs> {
        match self.channel {
            Some(Channel::Active { since }) => Some(now.saturating_sub(since)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_seeds_without_edge() {
        let mut det = EdgeDetector::new();
        assert_eq!(det.observe(100, true), None);
        assert!(det.is_active());

        let mut det = EdgeDetector::new();
        assert_eq!(det.observe(100, false), None);
        assert!(!det.is_active());
    }

    #[test]
    fn test_rising_then_falling() {
        let mut det = EdgeDetector::new();
        det.observe(0, false);
        assert_eq!(det.observe(10, true), Some(Edge::Rising { at: 10 }));
        assert_eq!(det.observe(20, true), None);
        assert_eq!(
            det.observe(310, false),
            Some(Edge::Falling {
                at: 310,
                duration: 300
            })
        );
        assert!(!det.is_active());
    }

    #[test]
    fn test_steady_samples_emit_nothing() {
        let mut det = EdgeDetector::new();
        det.observe(0, false);
        for t in 1..50 {
            assert_eq!(det.observe(t, false), None);
        }
    }

    #[test]
    fn test_backwards_clock_clamps_duration_to_zero() {
        let mut det = EdgeDetector::new();
        det.observe(0, false);
        det.observe(500, true);
        assert_eq!(
            det.observe(400, false),
            Some(Edge::Falling {
                at: 400,
                duration: 0
            })
        );
    }

    #[test]
    fn test_current_pulse_tracks_elapsed_time() {
        let mut det = EdgeDetector::new();
        det.observe(0, false);
        assert_eq!(det.current_pulse_ms(0), None);
        det.observe(100, true);
        assert_eq!(det.current_pulse_ms(350), Some(250));
        det.observe(400, false);
        assert_eq!(det.current_pulse_ms(500), None);
    }
}
