use crate::events::RadioEvents;
use crate::timer::OneShotTimer;
use core::cell::RefCell;
use core::fmt;
use critical_section::Mutex;

/// A one-shot timer shared between `main` and the timer interrupt.
///
/// The timer is installed once at startup with [`install`](SharedTimer::install).
/// `&SharedTimer<T>` implements [`OneShotTimer`] so the startup code can
/// schedule the first period through the same handle the ISR uses.
///
/// # Example
/// ```rust,ignore
/// static EVENTS: RadioEvents = RadioEvents::new();
/// static TIMER: SharedTimer<RtcTimer> = SharedTimer::new();
///
/// fn main() -> ! {
///     TIMER.install(rtc_timer);
///     let mut exerciser = Exerciser::new(&EVENTS, radio, tx_led, rx_led);
///     exerciser.start(&mut &TIMER);
///     exerciser.run(&mut WfiIdle)
/// }
///
/// #[interrupt]
/// fn RTC() {
///     TIMER.fire(&EVENTS);
/// }
/// ```
pub struct SharedTimer<T> {
    timer: Mutex<RefCell<Option<T>>>,
}

impl<T: OneShotTimer> SharedTimer<T> {
    /// Creates an empty slot. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            timer: Mutex::new(RefCell::new(None)),
        }
    }

    /// Stores `timer` in the slot, replacing any previous one.
    pub fn install(&self, timer: T) {
        critical_section::with(|cs| {
            let _ = self.timer.borrow(cs).replace(Some(timer));
        });
    }

    /// Returns `true` once a timer has been installed.
    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.timer.borrow(cs).borrow().is_some())
    }

    /// Timer interrupt body: raises the timer flag on `events` and re-arms
    /// the timer for the next period.
    ///
    /// Does nothing if no timer has been installed yet.
    pub fn fire(&self, events: &RadioEvents) {
        critical_section::with(|cs| {
            if let Some(timer) = self.timer.borrow(cs).borrow_mut().as_mut() {
                events.timer_fired(timer);
            }
        });
    }
}

impl<T: OneShotTimer> fmt::Debug for SharedTimer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedTimer")
            .field("installed", &self.is_installed())
            .finish()
    }
}

impl<T: OneShotTimer> Default for SharedTimer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: OneShotTimer> OneShotTimer for &SharedTimer<T> {
    fn schedule_in(&mut self, ticks: u32) {
        critical_section::with(|cs| {
            if let Some(timer) = self.timer.borrow(cs).borrow_mut().as_mut() {
                timer.schedule_in(ticks);
            }
        });
    }
}
