//! Compile-time constants for the radio exerciser.
//!
//! The exerciser has no runtime configuration: the frequency plan, the frame
//! size, the transmit cadence and the payload content are all fixed here.
//!
//! ## Key Concepts
//!
//! - **Frame size**: the largest frame the transceiver accepts, including the
//!   frame check sequence the hardware appends.
//! - **Frequency plan**: channel `CHANNEL` sits at
//!   `FREQUENCY_0 + CHANNEL * CHANNEL_SPACING`.
//! - **Cadence**: one transmit every `TIMER_PERIOD` timer ticks.

/// Length (in bytes) of the frame check sequence appended by the transceiver.
pub const LENGTH_CRC: u16 = 4;

/// Total length (in bytes) of every transmitted frame, including the FCS.
///
/// This is the maximum frame length supported by the transceiver (2047 bytes).
pub const LENGTH_PACKET: u16 = 2043 + LENGTH_CRC;

/// See [`LENGTH_PACKET`](crate::consts::LENGTH_PACKET)
pub const LENGTH_PACKET_USIZE: usize = LENGTH_PACKET as usize;

/// Channel index the radio is tuned to (902.8 MHz).
pub const CHANNEL: u16 = 0;

/// Spacing between adjacent channels, in kHz.
pub const CHANNEL_SPACING: u16 = 800;

/// Centre frequency of channel 0 (902.8 MHz), in the facade's frequency units.
pub const FREQUENCY_0: u32 = 9_028_000;

/// Interval between two transmissions, in timer ticks.
///
/// `0xffff` ticks is 2 s with a 32 kHz tick clock.
pub const TIMER_PERIOD: u32 = 0xffff;

/// Tick rate of the one-shot timer that paces transmissions, in Hz.
pub const TIMER_CLOCK_HZ: u32 = 32_768;

/// Byte repeated over the whole outbound frame.
pub const PAYLOAD_BYTE: u8 = 0x99;
