//! Outbound engine events.
//!
//! The [`EncoderService`](super::service::EncoderService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them.

use crate::encoder::CharacterBuffer;
use crate::fsm::StateId;

/// Structured events emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The engine has started (carries initial state).
    Started(StateId),

    /// The FSM transitioned between states.
    StateChanged { from: StateId, to: StateId },

    /// A bit was shifted into the accumulator.
    BitInserted { bit: u8, count: u8 },

    /// A bit press was rejected because eight bits are already held.
    AccumulatorFull,

    /// Held bits were discarded.
    AccumulatorCleared,

    /// A complete byte was appended to the string.
    CharacterSaved { byte: u8, len: usize },

    /// A complete byte was discarded because the string is full.
    CharacterDropped(u8),

    /// Save was pressed with fewer than eight bits held.
    SaveIncomplete { count: u8 },

    /// The saved string was emptied.
    BufferCleared,

    /// Periodic status snapshot.
    Status(EngineStatus),
}

/// A point-in-time view of the engine suitable for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineStatus {
    pub state: StateId,
    pub previous: Option<StateId>,
    pub register: u8,
    pub bit_count: u8,
    pub buffer_len: usize,
    pub buffer: CharacterBuffer,
    pub breathing_level: u8,
}
