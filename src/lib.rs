//! # radio-exerciser
//!
//! A portable, no_std duty-cycled radio exerciser for a single embedded node.
//!
//! The node listens for inbound frames and, on a fixed period, transmits a
//! maximum-length frame filled with a constant byte. Its job is to put a
//! transceiver and its timing under real interrupt load, not to implement a
//! protocol: there is no addressing, acknowledgement or retransmission.
//!
//! This crate implements the exerciser using:
//! - a pending-event flag set raised from interrupt context and drained by a
//!   cooperative dispatch loop
//! - an explicit transmit/receive transition table
//! - `embedded-hal` output pins for the two busy indicators
//! - interrupt-safe shared state with `critical-section`
//! - a radio driver facade trait, so any transceiver driver can be plugged in
//!
//! ## Crate features
//! | Feature     | Description |
//! |-------------|-------------|
//! | `std`       | Disables `#![no_std]` support |
//! | `cortex-m`  | Provides [`idle::WfiIdle`], a `WFI`-based low-power wait |
//! | `defmt-0-3` | Uses `defmt` logging |
//! | `log`       | Uses `log` logging |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use radio_exerciser::{declare_exerciser_statics, exerciser_timer_isr};
//! use radio_exerciser::exerciser::Exerciser;
//! use radio_exerciser::idle::WfiIdle;
//!
//! declare_exerciser_statics!(RtcTimer);
//!
//! #[entry]
//! fn main() -> ! {
//!     let board = board::init();
//!     EXERCISER_TIMER.install(board.rtc);
//!     let mut exerciser =
//!         Exerciser::new(&EXERCISER_EVENTS, board.radio, board.sync_led, board.error_led);
//!     exerciser.start(&mut &EXERCISER_TIMER);
//!     exerciser.run(&mut WfiIdle)
//! }
//!
//! #[interrupt]
//! fn RTC() {
//!     exerciser_timer_isr!();
//! }
//!
//! #[interrupt]
//! fn RADIO() {
//!     let status = radio_irq_status();
//!     if status.start_of_frame() {
//!         EXERCISER_EVENTS.start_frame(status.timestamp());
//!     }
//!     if status.end_of_frame() {
//!         EXERCISER_EVENTS.end_frame(status.timestamp());
//!     }
//! }
//! ```
//!
//! ## Integration Notes
//!
//! - Only [`events::RadioEvents`] may be touched from interrupt handlers.
//! - The transmit period must be much longer than one frame's air time: a
//!   timer firing during a transmit is dropped, not queued.
//!
//! --
//! Designed for `#![no_std]` use in resource-constrained embedded environments.

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]
#![cfg_attr(not(feature = "std"), no_std)]

pub use critical_section;

pub use heapless;

mod fmt;

pub mod consts;
pub mod counters;
pub mod error;
pub mod events;
pub mod exerciser;
pub mod flags;
pub mod idle;
#[cfg(test)]
mod mock;
pub mod mode;
pub mod radio;
pub mod timer;
