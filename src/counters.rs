//! Debug counters bumped by the notification handlers.
//!
//! These are diagnostics only; nothing in the exerciser depends on their values.
//! Handlers write them, everyone else takes a [`DebugStats`] snapshot.

use core::cell::Cell;
use core::fmt;
use critical_section::Mutex;

/// Kinds of notification the counters track.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum Counter {
    /// The radio's internal timer overflowed.
    RadioTimerOverflow,
    /// The radio's internal timer hit its compare value.
    RadioTimerCompare,
    /// A frame started.
    StartFrame,
    /// A frame ended.
    EndFrame,
    /// The periodic transmit timer fired.
    Timer,
}

/// A copy of the counter values at one point in time.
///
/// Counters wrap on overflow.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct DebugStats {
    /// Number of radio timer overflows.
    pub radio_timer_overflows: u32,
    /// Number of radio timer compare matches.
    pub radio_timer_compares: u32,
    /// Number of start-of-frame notifications.
    pub start_frames: u32,
    /// Number of end-of-frame notifications.
    pub end_frames: u32,
    /// Number of periodic timer firings.
    pub timers: u32,
}

impl DebugStats {
    const fn zeroed() -> Self {
        Self {
            radio_timer_overflows: 0,
            radio_timer_compares: 0,
            start_frames: 0,
            end_frames: 0,
            timers: 0,
        }
    }

    fn slot(&mut self, counter: Counter) -> &mut u32 {
        match counter {
            Counter::RadioTimerOverflow => &mut self.radio_timer_overflows,
            Counter::RadioTimerCompare => &mut self.radio_timer_compares,
            Counter::StartFrame => &mut self.start_frames,
            Counter::EndFrame => &mut self.end_frames,
            Counter::Timer => &mut self.timers,
        }
    }
}

/// Interrupt-safe notification counters.
pub struct DebugCounters {
    stats: Mutex<Cell<DebugStats>>,
}

impl DebugCounters {
    /// Creates zeroed counters. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            stats: Mutex::new(Cell::new(DebugStats::zeroed())),
        }
    }

    /// Increments `counter` by one.
    pub fn record(&self, counter: Counter) {
        critical_section::with(|cs| {
            let cell = self.stats.borrow(cs);
            let mut stats = cell.get();
            let slot = stats.slot(counter);
            *slot = slot.wrapping_add(1);
            cell.set(stats);
        });
    }

    /// Returns a consistent copy of every counter.
    pub fn snapshot(&self) -> DebugStats {
        critical_section::with(|cs| self.stats.borrow(cs).get())
    }
}

impl Default for DebugCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DebugCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DebugCounters")
            .field(&self.snapshot())
            .finish()
    }
}
