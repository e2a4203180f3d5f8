//! Duty-cycled radio exerciser.
//!
//! This module provides [`Exerciser`], the loop-side half of the program. It
//! listens for inbound frames and, every [`TIMER_PERIOD`] ticks, transmits a
//! frame of [`LENGTH_PACKET`] bytes all set to [`PAYLOAD_BYTE`]. Two indicator
//! pins show when a frame is on the air.
//!
//! The interrupt-side half is [`RadioEvents`]: radio and timer handlers raise
//! flags there, and [`Exerciser::run`] drains them forever.
//!
//! ## Ownership
//!
//! | State                  | Written by               | Read by                  |
//! |------------------------|--------------------------|--------------------------|
//! | pending flags          | handlers (raise), loop (clear) | loop               |
//! | debug counters         | handlers                 | anyone (snapshot)        |
//! | mode, frame buffer     | loop                     | loop                     |
//!
//! Only the first two are shared, and both are guarded by `critical_section`.
//!
//! ## Example
//!
//! ```rust,ignore
//! static EVENTS: RadioEvents = RadioEvents::new();
//! static TIMER: SharedTimer<RtcTimer> = SharedTimer::new();
//!
//! #[entry]
//! fn main() -> ! {
//!     let board = board::init();
//!     TIMER.install(board.rtc);
//!     let mut exerciser = Exerciser::new(&EVENTS, board.radio, board.sync_led, board.error_led);
//!     exerciser.start(&mut &TIMER);
//!     exerciser.run(&mut WfiIdle)
//! }
//! ```

use crate::consts::{
    CHANNEL, CHANNEL_SPACING, FREQUENCY_0, LENGTH_PACKET, LENGTH_PACKET_USIZE, PAYLOAD_BYTE,
    TIMER_PERIOD,
};
use crate::error::FrameError;
use crate::events::RadioEvents;
use crate::flags::Event;
use crate::idle::Idle;
use crate::mode::{Action, NodeMode, transition};
use crate::radio::{Indicator, RadioDriver, ReceivedFrame};
use crate::timer::OneShotTimer;
use embedded_hal::digital::OutputPin;
use heapless::Vec;

/// Statistics kept by the dispatch loop.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct ExerciserStats {
    /// Transmissions started.
    pub tx_started: u32,
    /// Transmissions that reached end of frame.
    pub tx_done: u32,
    /// Frames received with a valid CRC.
    pub rx_good: u32,
    /// Frames that failed their CRC or could not be read back.
    pub rx_bad: u32,
    /// Timer firings ignored because a transmit was in flight.
    pub timer_dropped: u32,
}

/// The exerciser's loop-owned context: mode, frame buffer and radio facade.
///
/// ## Type Parameters
///
/// - `R`: the radio driver facade
/// - `TXL`: indicator lit while a frame is being sent
/// - `RXL`: indicator lit while a frame is being received
///
/// Indicator pin errors are ignored.
#[derive(Debug)]
pub struct Exerciser<'a, R, TXL, RXL>
where
    R: RadioDriver,
    TXL: OutputPin,
    RXL: OutputPin,
{
    events: &'a RadioEvents,
    /// The radio driver facade.
    pub radio: R,
    /// Transmit indicator pin.
    pub tx_led: TXL,
    /// Receive indicator pin.
    pub rx_led: RXL,
    mode: NodeMode,
    packet: Vec<u8, LENGTH_PACKET_USIZE>,
    last_frame: Option<ReceivedFrame>,
    stats: ExerciserStats,
}

impl<'a, R, TXL, RXL> Exerciser<'a, R, TXL, RXL>
where
    R: RadioDriver,
    TXL: OutputPin,
    RXL: OutputPin,
{
    /// Creates an exerciser in [`NodeMode::Receiving`] with an empty frame buffer.
    ///
    /// Nothing touches the hardware until [`start`](Exerciser::start).
    pub fn new(events: &'a RadioEvents, radio: R, tx_led: TXL, rx_led: RXL) -> Self {
        Self {
            events,
            radio,
            tx_led,
            rx_led,
            mode: NodeMode::Receiving,
            packet: Vec::new(),
            last_frame: None,
            stats: ExerciserStats::default(),
        }
    }

    /// Brings the radio up and primes the duty cycle.
    ///
    /// Fills the frame buffer with the payload, schedules the first timer
    /// period, powers and tunes the radio, starts listening, and raises the
    /// timer flag so that the first dispatch pass transmits straight away.
    pub fn start<T: OneShotTimer>(&mut self, timer: &mut T) {
        self.fill_payload();
        timer.schedule_in(TIMER_PERIOD);

        self.radio.rf_on();
        self.radio.set_frequency(CHANNEL_SPACING, FREQUENCY_0, CHANNEL);
        self.radio.rx_enable();
        self.mode = NodeMode::Receiving;
        info!(
            "radio on: channel {} ({} + {} * {} kHz), {}-byte frames every {} ticks",
            CHANNEL,
            FREQUENCY_0,
            CHANNEL,
            CHANNEL_SPACING,
            LENGTH_PACKET,
            TIMER_PERIOD
        );

        self.events.flags.raise(Event::Timer);
    }

    /// Runs the duty cycle forever: idle until a flag is pending, then drain.
    pub fn run<I: Idle>(&mut self, idle: &mut I) -> ! {
        loop {
            self.wait_for_event(idle);
            let _ = self.dispatch_pending();
        }
    }

    /// Idles until at least one flag is pending. Returns immediately if one already is.
    pub fn wait_for_event<I: Idle>(&mut self, idle: &mut I) {
        while self.events.flags.is_empty() {
            idle.wait(&self.events.flags);
        }
    }

    /// Handles and clears pending flags until a whole pass finds none.
    ///
    /// Each pass checks start-of-frame, end-of-frame and timer in that order.
    /// A flag raised while a pass is running is picked up by the same pass if
    /// its turn has not come yet, and by the next pass otherwise.
    ///
    /// # Returns
    /// The number of events handled.
    pub fn dispatch_pending(&mut self) -> usize {
        let mut handled = 0;
        while !self.events.flags.is_empty() {
            for event in Event::PRIORITY {
                if self.events.flags.is_set(event) {
                    self.handle(event);
                    self.events.flags.clear(event);
                    handled += 1;
                }
            }
        }
        handled
    }

    /// Handles one event in the current mode and applies the resulting transition.
    ///
    /// Does not touch the pending flags.
    pub fn handle(&mut self, event: Event) {
        let (next, action) = transition(self.mode, event);
        trace!("{:?} in {:?}: {:?}", event, self.mode, action);

        match action {
            Action::IndicatorOn(indicator) => self.set_indicator(indicator, true),
            Action::CollectFrame => {
                match self.collect_frame() {
                    Ok(frame) => {
                        self.stats.rx_good = self.stats.rx_good.wrapping_add(1);
                        debug!(
                            "rx {} bytes, rssi {} dBm, lqi {}",
                            frame.len,
                            frame.rssi,
                            frame.lqi
                        );
                    }
                    Err(FrameError::Driver(_)) => {
                        self.stats.rx_bad = self.stats.rx_bad.wrapping_add(1);
                        warn!("radio could not return the received frame");
                    }
                    Err(FrameError::TooLong { len, capacity }) => {
                        self.stats.rx_bad = self.stats.rx_bad.wrapping_add(1);
                        warn!("rx frame of {} bytes exceeds {}-byte buffer", len, capacity);
                    }
                    Err(FrameError::BadCrc) => {
                        self.stats.rx_bad = self.stats.rx_bad.wrapping_add(1);
                        debug!("rx frame failed its CRC check");
                    }
                }
                self.set_indicator(Indicator::Receive, false);
            }
            Action::ResumeReceive => {
                self.radio.rx_enable();
                self.stats.tx_done = self.stats.tx_done.wrapping_add(1);
                self.set_indicator(Indicator::Transmit, false);
            }
            Action::StartTransmit => {
                self.radio.rf_off();
                self.fill_payload();
                debug!("tx {} bytes of {:#x}", self.packet.len(), PAYLOAD_BYTE);
                self.radio.load_packet(&self.packet);
                self.radio.tx_enable();
                self.radio.tx_now();
                self.stats.tx_started = self.stats.tx_started.wrapping_add(1);
            }
            Action::DropTimer => {
                self.stats.timer_dropped = self.stats.timer_dropped.wrapping_add(1);
                debug!("timer fired during transmit, dropped");
            }
        }

        if next != self.mode {
            debug!("mode {:?} -> {:?}", self.mode, next);
            self.mode = next;
        }
    }

    /// Current duty-cycle mode.
    pub fn mode(&self) -> NodeMode {
        self.mode
    }

    /// Contents of the frame buffer: the outbound payload while transmitting,
    /// the last inbound frame after a receive.
    pub fn frame(&self) -> &[u8] {
        &self.packet
    }

    /// Metadata of the last frame read back from the radio, if any.
    pub fn last_frame(&self) -> Option<ReceivedFrame> {
        self.last_frame
    }

    /// Loop-side statistics.
    pub fn stats(&self) -> ExerciserStats {
        self.stats
    }

    /// The shared flags and counters.
    pub fn events(&self) -> &'a RadioEvents {
        self.events
    }

    fn fill_payload(&mut self) {
        self.packet.clear();
        let _ = self.packet.resize(LENGTH_PACKET_USIZE, PAYLOAD_BYTE);
    }

    /// Reads the completed frame into the frame buffer.
    ///
    /// The buffer is opened to full capacity first, since the received length
    /// is only known once the radio reports it, then cut down to that length.
    /// On error the buffer is left empty.
    fn collect_frame(&mut self) -> Result<ReceivedFrame, FrameError<R::Error>> {
        let _ = self.packet.resize(LENGTH_PACKET_USIZE, 0);
        let capacity = self.packet.len();

        let frame = match self.radio.get_received_frame(&mut self.packet) {
            Ok(frame) => frame,
            Err(e) => {
                self.packet.clear();
                return Err(FrameError::Driver(e));
            }
        };
        self.last_frame = Some(frame);

        if frame.len > capacity {
            self.packet.clear();
            return Err(FrameError::TooLong {
                len: frame.len,
                capacity,
            });
        }
        self.packet.truncate(frame.len);

        if !frame.crc_ok {
            return Err(FrameError::BadCrc);
        }
        Ok(frame)
    }

    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        match (indicator, on) {
            (Indicator::Transmit, true) => {
                let _ = self.tx_led.set_high();
            }
            (Indicator::Transmit, false) => {
                let _ = self.tx_led.set_low();
            }
            (Indicator::Receive, true) => {
                let _ = self.rx_led.set_high();
            }
            (Indicator::Receive, false) => {
                let _ = self.rx_led.set_low();
            }
        }
    }
}
