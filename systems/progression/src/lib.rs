#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Collection-threshold progression system.
//!
//! Watches the relic event stream and wakes the sentinel once the
//! collection count reaches the configured threshold. The world guarantees
//! activation is idempotent; this system additionally latches so the
//! command is emitted at most once per session.

use outlands_core::{tuning, Command, Event};

/// Pure system that triggers the one-time sentinel activation.
#[derive(Debug, Default)]
pub struct Progression {
    activated: bool,
}

impl Progression {
    /// Creates a new progression system that has not yet activated anything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes events and emits the activation command when the relic
    /// threshold is reached.
    pub fn handle(&mut self, events: &[Event], out: &mut Vec<Command>) {
        if self.activated {
            return;
        }

        for event in events {
            if let Event::RelicCollected { collected, .. } = event {
                if *collected >= tuning::RELIC_COUNT {
                    self.activated = true;
                    out.push(Command::ActivateSentinel);
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outlands_core::RelicId;

    fn collected(count: u32) -> Event {
        Event::RelicCollected {
            relic: RelicId::new(count - 1),
            collected: count,
        }
    }

    #[test]
    fn below_threshold_stays_silent() {
        let mut system = Progression::new();
        let mut out = Vec::new();

        for count in 1..tuning::RELIC_COUNT {
            system.handle(&[collected(count)], &mut out);
        }

        assert!(out.is_empty());
    }

    #[test]
    fn threshold_emits_activation_once() {
        let mut system = Progression::new();
        let mut out = Vec::new();

        system.handle(&[collected(tuning::RELIC_COUNT)], &mut out);
        assert_eq!(out, vec![Command::ActivateSentinel]);

        out.clear();
        system.handle(&[collected(tuning::RELIC_COUNT)], &mut out);
        assert!(out.is_empty(), "the latch holds after activation");
    }

    #[test]
    fn unrelated_events_are_ignored() {
        let mut system = Progression::new();
        let mut out = Vec::new();

        system.handle(
            &[Event::TimeAdvanced {
                dt: std::time::Duration::from_millis(100),
            }],
            &mut out,
        );

        assert!(out.is_empty());
    }
}
