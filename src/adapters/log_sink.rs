//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured engine events to the
//! `log` facade (UART / USB-CDC through `esp_idf_logger` in production).

use log::{info, warn};

use crate::app::events::EngineEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`EngineEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &EngineEvent) {
        match event {
            EngineEvent::Started(state) => {
                info!("START | initial_state={:?}", state);
            }
            EngineEvent::StateChanged { from, to } => {
                info!("STATE | {:?} -> {:?}", from, to);
            }
            EngineEvent::BitInserted { bit, count } => {
                info!("INPUT | bit={} ({}/8)", bit, count);
            }
            EngineEvent::AccumulatorFull => {
                warn!("INPUT | eight bits held, press D to save or C to clear");
            }
            EngineEvent::AccumulatorCleared => {
                info!("INPUT | bits cleared");
            }
            EngineEvent::CharacterSaved { byte, len } => {
                info!(
                    "SAVE  | char={:?} (0x{:02X}) len={}",
                    char::from(*byte),
                    byte,
                    len
                );
            }
            EngineEvent::CharacterDropped(byte) => {
                warn!("SAVE  | buffer full, dropped 0x{:02X}", byte);
            }
            EngineEvent::SaveIncomplete { count } => {
                warn!("SAVE  | incomplete, {}/8 bits", count);
            }
            EngineEvent::BufferCleared => {
                info!("SAVE  | buffer cleared");
            }
            EngineEvent::Status(s) => {
                info!(
                    "STATUS | state={:?} prev={:?} | reg=0b{:08b} bits={} | \
                     buf[{}]=\"{}\" | breath={}%",
                    s.state,
                    s.previous,
                    s.register,
                    s.bit_count,
                    s.buffer_len,
                    s.buffer,
                    s.breathing_level,
                );
            }
        }
    }
}
