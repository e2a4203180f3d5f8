//! Duty-cycle mode and its transition table.
//!
//! The exerciser is always either listening or sending. [`transition`] maps
//! the current [`NodeMode`] and a pending [`Event`] to the next mode and the
//! [`Action`] the exerciser must carry out. It is a pure function: all radio
//! and indicator side effects are performed by
//! [`Exerciser`](crate::exerciser::Exerciser).
//!
//! | Mode         | Event        | Next mode    | Action                               |
//! |--------------|--------------|--------------|--------------------------------------|
//! | Receiving    | StartFrame   | Receiving    | `IndicatorOn(Receive)`               |
//! | Transmitting | StartFrame   | Transmitting | `IndicatorOn(Transmit)`              |
//! | Receiving    | EndFrame     | Receiving    | `CollectFrame`                       |
//! | Transmitting | EndFrame     | Receiving    | `ResumeReceive`                      |
//! | Receiving    | Timer        | Transmitting | `StartTransmit`                      |
//! | Transmitting | Timer        | Transmitting | `DropTimer`                          |

use crate::flags::Event;
use crate::radio::Indicator;

/// The node's current duty-cycle phase.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum NodeMode {
    /// Sending the fixed outbound frame.
    Transmitting,
    /// Listening for inbound frames.
    #[default]
    Receiving,
}

/// Work the exerciser performs for one handled event.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum Action {
    /// A frame started: switch the given busy indicator on.
    IndicatorOn(Indicator),
    /// An inbound frame completed: fetch it into the frame buffer, then switch
    /// the receive indicator off.
    CollectFrame,
    /// Our frame went out: re-arm the receiver, then switch the transmit
    /// indicator off.
    ResumeReceive,
    /// Stop listening, refill the frame buffer with the payload and send it.
    StartTransmit,
    /// The timer fired mid-transmit. Nothing is queued; the next firing after
    /// the transmit completes starts the next frame.
    DropTimer,
}

/// Computes the next mode and the action for `event` handled in `mode`.
///
/// Mode only changes on `Timer` while receiving and on `EndFrame` while
/// transmitting.
pub const fn transition(mode: NodeMode, event: Event) -> (NodeMode, Action) {
    match (mode, event) {
        (NodeMode::Receiving, Event::StartFrame) => {
            (NodeMode::Receiving, Action::IndicatorOn(Indicator::Receive))
        }
        (NodeMode::Transmitting, Event::StartFrame) => (
            NodeMode::Transmitting,
            Action::IndicatorOn(Indicator::Transmit),
        ),
        (NodeMode::Receiving, Event::EndFrame) => (NodeMode::Receiving, Action::CollectFrame),
        (NodeMode::Transmitting, Event::EndFrame) => (NodeMode::Receiving, Action::ResumeReceive),
        (NodeMode::Receiving, Event::Timer) => (NodeMode::Transmitting, Action::StartTransmit),
        (NodeMode::Transmitting, Event::Timer) => (NodeMode::Transmitting, Action::DropTimer),
    }
}
