//! Low-power wait used by the dispatch loop while no flag is pending.

use crate::flags::PendingFlags;

/// Suspends the processor until a notification may have been delivered.
///
/// Returning early (spuriously) is allowed: the dispatch loop re-checks the
/// flag set after every wait.
pub trait Idle {
    /// Waits for activity on `pending`.
    fn wait(&mut self, pending: &PendingFlags);
}

/// Portable idle that only hints the core it is spinning.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinIdle;

impl Idle for SpinIdle {
    fn wait(&mut self, pending: &PendingFlags) {
        sleep_unless_pending(pending, core::hint::spin_loop);
    }
}

/// Cortex-M idle: sleeps with `WFI` until the next interrupt.
///
/// The flag set is checked inside a critical section so that a notification
/// arriving between the check and `WFI` still wakes the core. A pending
/// interrupt ends `WFI` even while masked, and is serviced when the critical
/// section restores the caller's interrupt state.
#[cfg(feature = "cortex-m")]
#[derive(Debug, Default, Clone, Copy)]
pub struct WfiIdle;

#[cfg(feature = "cortex-m")]
impl Idle for WfiIdle {
    fn wait(&mut self, pending: &PendingFlags) {
        cortex_m::interrupt::free(|_| sleep_unless_pending(pending, cortex_m::asm::wfi));
    }
}

/// Runs `sleep` only if nothing is pending.
fn sleep_unless_pending(pending: &PendingFlags, sleep: impl FnOnce()) {
    if pending.is_empty() {
        sleep();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Event;
    use core::cell::Cell;

    #[test]
    fn test_sleeps_only_when_nothing_pending() {
        let flags = PendingFlags::new();
        let sleeps = Cell::new(0);

        sleep_unless_pending(&flags, || sleeps.set(sleeps.get() + 1));
        assert_eq!(sleeps.get(), 1);

        flags.raise(Event::EndFrame);
        sleep_unless_pending(&flags, || sleeps.set(sleeps.get() + 1));
        assert_eq!(sleeps.get(), 1);
    }

    #[test]
    fn test_spin_idle_leaves_flags_untouched() {
        let flags = PendingFlags::new();
        let mut idle = SpinIdle;

        idle.wait(&flags);
        assert!(flags.is_empty());

        flags.raise(Event::Timer);
        idle.wait(&flags);
        assert_eq!(flags.bits(), Event::Timer.mask());
    }
}
