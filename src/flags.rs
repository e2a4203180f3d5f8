//! Pending-event flag set shared between notification handlers and the dispatch loop.
//!
//! Notification handlers (interrupt context) only ever [`raise`](PendingFlags::raise)
//! flags. The dispatch loop is the only reader and the only one to
//! [`clear`](PendingFlags::clear) them. Every read-modify-write happens inside a
//! single `critical_section::with`, so a flag raised by an interrupt while the
//! loop clears a different flag is never lost.

use core::cell::Cell;
use core::fmt;
use critical_section::Mutex;

/// One kind of asynchronous notification that can be pending.
///
/// The discriminant is the flag's bit in the underlying mask.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
#[repr(u8)]
pub enum Event {
    /// The radio detected the start of a frame (transmitted or received).
    StartFrame = 0x01,
    /// The radio finished a frame (transmitted or received).
    EndFrame = 0x02,
    /// The periodic transmit timer fired.
    Timer = 0x04,
}

impl Event {
    /// Order in which the dispatch loop checks pending flags on every pass.
    pub const PRIORITY: [Event; 3] = [Event::StartFrame, Event::EndFrame, Event::Timer];

    /// Bit representing this event in the flag mask.
    pub const fn mask(self) -> u8 {
        self as u8
    }
}

/// A set of pending [`Event`] flags, safe to share with interrupt handlers.
///
/// Flags accumulate (logical OR) until the dispatch loop clears them one by one.
/// Raising an already-raised flag records nothing new: at most one occurrence
/// of each kind is pending at a time.
pub struct PendingFlags {
    bits: Mutex<Cell<u8>>,
}

impl PendingFlags {
    /// Creates an empty flag set. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            bits: Mutex::new(Cell::new(0)),
        }
    }

    /// Marks `event` as pending.
    ///
    /// Callable from interrupt context; never blocks beyond the critical section.
    pub fn raise(&self, event: Event) {
        critical_section::with(|cs| {
            let bits = self.bits.borrow(cs);
            bits.set(bits.get() | event.mask());
        });
    }

    /// Clears `event`, leaving every other pending flag untouched.
    ///
    /// Clearing a flag that is not set is a no-op.
    pub fn clear(&self, event: Event) {
        critical_section::with(|cs| {
            let bits = self.bits.borrow(cs);
            bits.set(bits.get() & !event.mask());
        });
    }

    /// Returns `true` if `event` is currently pending.
    pub fn is_set(&self, event: Event) -> bool {
        self.bits() & event.mask() != 0
    }

    /// Returns `true` if no flag is pending.
    pub fn is_empty(&self) -> bool {
        self.bits() == 0
    }

    /// Returns the highest-priority pending event without clearing it.
    ///
    /// Clearing is the caller's job once the event has been handled. The
    /// exerciser's dispatch loop does not use this: it checks each kind with
    /// [`is_set`](Self::is_set) once per pass in [`Event::PRIORITY`] order.
    pub fn next_pending(&self) -> Option<Event> {
        let bits = self.bits();
        Event::PRIORITY
            .into_iter()
            .find(|event| bits & event.mask() != 0)
    }

    /// Raw snapshot of the pending mask.
    pub fn bits(&self) -> u8 {
        critical_section::with(|cs| self.bits.borrow(cs).get())
    }
}

impl Default for PendingFlags {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PendingFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingFlags")
            .field("bits", &self.bits())
            .finish()
    }
}
