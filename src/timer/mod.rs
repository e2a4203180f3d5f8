//! Transmit timer: the one-shot timer abstraction and its interrupt glue.
//!
//! The exerciser paces its transmissions with a one-shot timer that its own
//! fired-callback re-arms (see [`RadioEvents::timer_fired`](crate::events::RadioEvents::timer_fired)).
//! The timer peripheral usually belongs to the interrupt handler, so this
//! module also provides [`SharedTimer`], a `critical_section` cell that lets
//! both `main` and the ISR reach it, plus macros that declare the statics.
//!
//! Common periods at [`TIMER_CLOCK_HZ`](crate::consts::TIMER_CLOCK_HZ):
//!
//! | TICKS   | Period   |
//! |---------|----------|
//! |  0x0800 |  62.5 ms |
//! |  0x4000 |   500 ms |
//! |  0x8000 |     1 s  |
//! |  0xffff |   ~2 s   |

mod isr;
pub use isr::*;

mod macros;

/// A timer that fires once, `ticks` after being scheduled.
///
/// Scheduling again before it fires replaces the pending deadline.
pub trait OneShotTimer {
    /// Arms the timer to fire `ticks` timer ticks from now.
    fn schedule_in(&mut self, ticks: u32);
}

/// Number of ticks of a `clock_hz` timer in `millis` milliseconds.
///
/// Saturates at `u32::MAX`.
pub const fn ticks_from_millis(clock_hz: u32, millis: u32) -> u32 {
    let ticks = (clock_hz as u64 * millis as u64) / 1_000;
    if ticks > u32::MAX as u64 {
        u32::MAX
    } else {
        ticks as u32
    }
}

/// Duration of `ticks` ticks of a `clock_hz` timer, in milliseconds (rounded down).
pub const fn millis_from_ticks(clock_hz: u32, ticks: u32) -> u32 {
    ((ticks as u64 * 1_000) / clock_hz as u64) as u32
}
