//! Radio driver facade consumed by the exerciser.
//!
//! The transceiver itself (register maps, SPI plumbing, calibration) lives
//! behind [`RadioDriver`]. The exerciser only asks it to power up or down,
//! tune, listen, send one buffer, and hand over the last received frame.

use core::fmt::Debug;

/// Metadata the driver reports for a frame it copied into the caller's buffer.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct ReceivedFrame {
    /// Number of bytes the radio received, FCS included.
    pub len: usize,
    /// Received signal strength, in dBm.
    pub rssi: i8,
    /// Link quality indicator.
    pub lqi: u8,
    /// Whether the hardware integrity check passed.
    pub crc_ok: bool,
}

/// The two "busy" indicators the exerciser drives.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum Indicator {
    /// Lit while a frame is being sent.
    Transmit,
    /// Lit while a frame is being received.
    Receive,
}

/// Operations the exerciser needs from the transceiver driver.
///
/// Everything except [`get_received_frame`](RadioDriver::get_received_frame)
/// is fire-and-forget: failures are the driver's business.
pub trait RadioDriver {
    /// Error reported when a received frame cannot be read back.
    type Error: Debug;

    /// Powers the radio on.
    fn rf_on(&mut self);

    /// Stops any reception or transmission and idles the radio.
    fn rf_off(&mut self);

    /// Tunes to `base + channel * spacing`.
    ///
    /// `spacing` is in kHz; `base` is in the driver's frequency units.
    fn set_frequency(&mut self, spacing: u16, base: u32, channel: u16);

    /// Arms the receiver. A start-of-frame notification follows when a frame
    /// begins to arrive.
    fn rx_enable(&mut self);

    /// Copies `packet` into the transmit buffer of the radio.
    fn load_packet(&mut self, packet: &[u8]);

    /// Prepares the radio to transmit the loaded packet.
    fn tx_enable(&mut self);

    /// Starts sending the loaded packet immediately.
    fn tx_now(&mut self);

    /// Copies the last received frame into `buf` and reports its metadata.
    ///
    /// Copies at most `buf.len()` bytes. The reported `len` is what the
    /// hardware received and may exceed `buf.len()`.
    fn get_received_frame(&mut self, buf: &mut [u8]) -> Result<ReceivedFrame, Self::Error>;
}
