/// Declares the statics shared between `main` and the interrupt handlers.
///
/// Creates `EXERCISER_EVENTS`, a [`RadioEvents`](crate::events::RadioEvents),
/// and `EXERCISER_TIMER`, a [`SharedTimer`](crate::timer::SharedTimer) for
/// the given timer type.
///
/// # Arguments
/// - `$timer`: The concrete one-shot timer type (must implement `OneShotTimer`)
///
/// # Example
/// ```rust,ignore
/// declare_exerciser_statics!(RtcTimer);
/// ```
#[macro_export]
macro_rules! declare_exerciser_statics {
    ( $timer:ty ) => {
        pub static EXERCISER_EVENTS: $crate::events::RadioEvents =
            $crate::events::RadioEvents::new();
        pub static EXERCISER_TIMER: $crate::timer::SharedTimer<$timer> =
            $crate::timer::SharedTimer::new();
    };
}

/// Body of the transmit timer interrupt.
///
/// Raises the timer flag on `EXERCISER_EVENTS` and re-arms `EXERCISER_TIMER`.
///
/// # Example
/// ```rust,ignore
/// #[interrupt]
/// fn RTC() {
///     exerciser_timer_isr!();
/// }
/// ```
///
/// # Notes
/// - Assumes the statics were declared with `declare_exerciser_statics!`.
/// - Does nothing until a timer has been installed in `EXERCISER_TIMER`.
#[macro_export]
macro_rules! exerciser_timer_isr {
    () => {
        EXERCISER_TIMER.fire(&EXERCISER_EVENTS)
    };
}
