//! Notification entry points called from interrupt context.
//!
//! [`RadioEvents`] is the only state shared between the radio/timer interrupt
//! handlers and the dispatch loop. Handlers raise flags and bump counters;
//! they never touch the mode or the frame buffer, which belong to
//! [`Exerciser`](crate::exerciser::Exerciser).
//!
//! ```rust,ignore
//! static EVENTS: RadioEvents = RadioEvents::new();
//!
//! #[interrupt]
//! fn RADIO() {
//!     if start_of_frame() {
//!         EVENTS.start_frame(capture());
//!     }
//!     if end_of_frame() {
//!         EVENTS.end_frame(capture());
//!     }
//! }
//! ```

use crate::consts::TIMER_PERIOD;
use crate::counters::{Counter, DebugCounters, DebugStats};
use crate::flags::{Event, PendingFlags};
use crate::timer::OneShotTimer;

/// Pending flags and debug counters shared with the notification handlers.
#[derive(Debug, Default)]
pub struct RadioEvents {
    /// Notifications awaiting the dispatch loop.
    pub flags: PendingFlags,
    counters: DebugCounters,
}

impl RadioEvents {
    /// Creates an empty event set. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            flags: PendingFlags::new(),
            counters: DebugCounters::new(),
        }
    }

    /// The radio's internal timer overflowed. Diagnostic only.
    pub fn radio_timer_overflow(&self) {
        self.counters.record(Counter::RadioTimerOverflow);
    }

    /// The radio's internal timer matched its compare value. Diagnostic only.
    pub fn radio_timer_compare(&self) {
        self.counters.record(Counter::RadioTimerCompare);
    }

    /// A frame started at `_timestamp` (radio timer ticks).
    pub fn start_frame(&self, _timestamp: u32) {
        self.flags.raise(Event::StartFrame);
        self.counters.record(Counter::StartFrame);
    }

    /// A frame ended at `_timestamp` (radio timer ticks).
    pub fn end_frame(&self, _timestamp: u32) {
        self.flags.raise(Event::EndFrame);
        self.counters.record(Counter::EndFrame);
    }

    /// The periodic timer fired.
    ///
    /// Re-arms `timer` for the next period straight away so the cadence does
    /// not depend on how fast the dispatch loop gets round to the flag.
    pub fn timer_fired<T: OneShotTimer>(&self, timer: &mut T) {
        self.flags.raise(Event::Timer);
        self.counters.record(Counter::Timer);
        timer.schedule_in(TIMER_PERIOD);
    }

    /// Copy of the notification counters.
    pub fn stats(&self) -> DebugStats {
        self.counters.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTimer;

    #[test]
    fn test_frame_notifications_raise_and_count() {
        let events = RadioEvents::new();
        events.start_frame(10);
        events.end_frame(20);
        events.start_frame(30);

        assert!(events.flags.is_set(Event::StartFrame));
        assert!(events.flags.is_set(Event::EndFrame));
        assert!(!events.flags.is_set(Event::Timer));

        let stats = events.stats();
        assert_eq!(stats.start_frames, 2);
        assert_eq!(stats.end_frames, 1);
    }

    #[test]
    fn test_timer_fired_rearms_timer() {
        let events = RadioEvents::new();
        let mut timer = MockTimer::default();

        events.timer_fired(&mut timer);
        events.timer_fired(&mut timer);

        assert!(events.flags.is_set(Event::Timer));
        assert_eq!(events.stats().timers, 2);
        assert_eq!(timer.scheduled, [TIMER_PERIOD, TIMER_PERIOD]);
    }

    #[test]
    fn test_radio_timer_notifications_only_count() {
        let events = RadioEvents::new();
        events.radio_timer_overflow();
        events.radio_timer_compare();
        events.radio_timer_compare();

        assert!(events.flags.is_empty());
        let stats = events.stats();
        assert_eq!(stats.radio_timer_overflows, 1);
        assert_eq!(stats.radio_timer_compares, 2);
    }
}
