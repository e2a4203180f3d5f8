//! Errors raised while collecting a received frame.

use core::fmt::Debug;
use thiserror::Error;

/// Why a received frame could not be stored in the frame buffer.
///
/// These never stop the exerciser: the frame is counted as bad and the
/// duty cycle carries on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError<E: Debug> {
    /// The driver could not read the frame back.
    #[error("radio driver failed to return the frame: {0:?}")]
    Driver(E),
    /// The hardware reported more bytes than the frame buffer holds.
    #[error("received {len} bytes, frame buffer holds {capacity}")]
    TooLong {
        /// Length reported by the hardware.
        len: usize,
        /// Capacity of the frame buffer.
        capacity: usize,
    },
    /// The hardware integrity check failed.
    #[error("frame failed its CRC check")]
    BadCrc,
}
