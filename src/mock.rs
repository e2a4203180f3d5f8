//! Recording doubles for the radio driver, the timer and the idle wait.
#![allow(dead_code)]

use crate::events::RadioEvents;
use crate::flags::PendingFlags;
use crate::idle::Idle;
use crate::radio::{RadioDriver, ReceivedFrame};
use crate::timer::OneShotTimer;
use std::vec::Vec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    RfOn,
    RfOff,
    SetFrequency { spacing: u16, base: u32, channel: u16 },
    RxEnable,
    LoadPacket { len: usize, uniform: Option<u8> },
    TxEnable,
    TxNow,
    GetReceivedFrame { capacity: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MockRadioError;

/// What the next `get_received_frame` call produces.
#[derive(Debug, Clone)]
pub(crate) enum Inbound {
    Frame {
        bytes: Vec<u8>,
        reported_len: usize,
        rssi: i8,
        lqi: u8,
        crc_ok: bool,
    },
    Fail,
}

impl Inbound {
    pub(crate) fn good(bytes: &[u8]) -> Self {
        Self::frame(bytes, bytes.len(), true)
    }

    pub(crate) fn frame(bytes: &[u8], reported_len: usize, crc_ok: bool) -> Self {
        Inbound::Frame {
            bytes: bytes.to_vec(),
            reported_len,
            rssi: -60,
            lqi: 200,
            crc_ok,
        }
    }
}

/// Radio driver that records every call.
///
/// When `events` is set, starting a transmit immediately raises start-frame
/// and end-frame on it, as an interrupt would in the middle of a dispatch pass.
#[derive(Debug, Default)]
pub(crate) struct MockRadio<'a> {
    pub calls: Vec<Call>,
    pub inbound: Option<Inbound>,
    pub events: Option<&'a RadioEvents>,
}

impl MockRadio<'_> {
    pub(crate) fn take_calls(&mut self) -> Vec<Call> {
        core::mem::take(&mut self.calls)
    }
}

impl RadioDriver for MockRadio<'_> {
    type Error = MockRadioError;

    fn rf_on(&mut self) {
        self.calls.push(Call::RfOn);
    }

    fn rf_off(&mut self) {
        self.calls.push(Call::RfOff);
    }

    fn set_frequency(&mut self, spacing: u16, base: u32, channel: u16) {
        self.calls.push(Call::SetFrequency {
            spacing,
            base,
            channel,
        });
    }

    fn rx_enable(&mut self) {
        self.calls.push(Call::RxEnable);
    }

    fn load_packet(&mut self, packet: &[u8]) {
        let uniform = match packet.first() {
            Some(&first) if packet.iter().all(|&b| b == first) => Some(first),
            _ => None,
        };
        self.calls.push(Call::LoadPacket {
            len: packet.len(),
            uniform,
        });
    }

    fn tx_enable(&mut self) {
        self.calls.push(Call::TxEnable);
    }

    fn tx_now(&mut self) {
        self.calls.push(Call::TxNow);
        if let Some(events) = self.events {
            events.start_frame(0);
            events.end_frame(1);
        }
    }

    fn get_received_frame(&mut self, buf: &mut [u8]) -> Result<ReceivedFrame, Self::Error> {
        self.calls.push(Call::GetReceivedFrame {
            capacity: buf.len(),
        });
        match self.inbound.take() {
            Some(Inbound::Frame {
                bytes,
                reported_len,
                rssi,
                lqi,
                crc_ok,
            }) => {
                let n = bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                Ok(ReceivedFrame {
                    len: reported_len,
                    rssi,
                    lqi,
                    crc_ok,
                })
            }
            Some(Inbound::Fail) | None => Err(MockRadioError),
        }
    }
}

/// Timer that records every period it was armed with.
#[derive(Debug, Default)]
pub(crate) struct MockTimer {
    pub scheduled: Vec<u32>,
}

impl OneShotTimer for MockTimer {
    fn schedule_in(&mut self, ticks: u32) {
        self.scheduled.push(ticks);
    }
}

/// Idle that delivers one scripted notification batch per wait.
#[derive(Debug, Default)]
pub(crate) struct ScriptedIdle<'a> {
    pub events: Option<&'a RadioEvents>,
    pub script: Vec<fn(&RadioEvents)>,
    pub waits: usize,
}

impl<'a> ScriptedIdle<'a> {
    pub(crate) fn new(events: &'a RadioEvents, script: &[fn(&RadioEvents)]) -> Self {
        Self {
            events: Some(events),
            script: script.to_vec(),
            waits: 0,
        }
    }
}

impl Idle for ScriptedIdle<'_> {
    fn wait(&mut self, _pending: &PendingFlags) {
        self.waits += 1;
        if let Some(events) = self.events {
            if !self.script.is_empty() {
                let deliver = self.script.remove(0);
                deliver(events);
            }
        }
    }
}
