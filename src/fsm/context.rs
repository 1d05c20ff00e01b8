//! Shared mutable context threaded through every FSM handler.
//!
//! `FsmContext` is the single struct that state handlers read from and
//! write to: the button snapshot for this tick, the encoder state, the
//! pattern generators, pending LED commands, and pending engine events.
//! The service samples inputs into it before the tick and flushes outputs
//! and events out of it afterwards.

use heapless::Vec;

use crate::config::EngineConfig;
use crate::encoder::{BitAccumulator, CharacterBuffer};
use crate::pattern::{Blinker, Breathing};
use crate::types::{Button, Led};

use super::StateId;
use crate::app::events::EngineEvent;

/// Upper bound on events one tick can produce (bit, save, clear, transition…).
pub const EVENT_OUTBOX_CAP: usize = 8;

// ---------------------------------------------------------------------------
// Button snapshot (read-only to state handlers; written by the service)
// ---------------------------------------------------------------------------

/// Edges observed this tick, one sample per button.
///
/// Every decision a handler makes within a tick reads from this snapshot,
/// so no button is ever queried twice in one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonSnapshot {
    pressed: [bool; Button::COUNT],
}

impl ButtonSnapshot {
    pub const fn none() -> Self {
        Self {
            pressed: [false; Button::COUNT],
        }
    }

    /// Snapshot with exactly the listed buttons pressed.
    pub fn with(buttons: &[Button]) -> Self {
        let mut s = Self::none();
        for &b in buttons {
            s.set(b, true);
        }
        s
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        if let Some(slot) = self.pressed.get_mut(button.index()) {
            *slot = pressed;
        }
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.pressed.get(button.index()).copied().unwrap_or(false)
    }

    pub fn any(&self) -> bool {
        self.pressed.iter().any(|&p| p)
    }

    /// Both bit buttons in the same tick: the Standby gesture.
    pub fn standby_combo(&self) -> bool {
        self.is_pressed(Button::Zero) && self.is_pressed(Button::One)
    }
}

// ---------------------------------------------------------------------------
// LED commands (written by state handlers; applied by the service)
// ---------------------------------------------------------------------------

/// Desired output for one LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedCommand {
    Off,
    On,
    /// PWM brightness, 0–100 %.
    Level(u8),
}

/// Room for every LED write one tick can issue: bit indicators, a save
/// flash, an entry hook's "all off", a blink or breathing step.
pub const LED_QUEUE_CAP: usize = 16;

/// Pending LED commands in the order handlers issued them.
///
/// A flash followed by an entry hook's "all off" reaches the sink as both
/// writes, in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedFrame {
    pending: Vec<(Led, LedCommand), LED_QUEUE_CAP>,
}

impl LedFrame {
    pub fn set(&mut self, led: Led, cmd: LedCommand) {
        if let Err(write) = self.pending.push((led, cmd)) {
            // Out of room: fold into the newest write for the same LED.
            match self.pending.iter_mut().rev().find(|(l, _)| *l == led) {
                Some(slot) => slot.1 = cmd,
                None => log::warn!("LED queue full, dropping {:?}", write),
            }
        }
    }

    pub fn set_binary(&mut self, led: Led, on: bool) {
        self.set(led, if on { LedCommand::On } else { LedCommand::Off });
    }

    pub fn all(&mut self, cmd: LedCommand) {
        for led in Led::ALL {
            self.set(led, cmd);
        }
    }

    /// The most recent pending command for `led`.
    pub fn get(&self, led: Led) -> Option<LedCommand> {
        self.pending
            .iter()
            .rev()
            .find(|(l, _)| *l == led)
            .map(|&(_, cmd)| cmd)
    }

    /// Remove and return every pending command, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = (Led, LedCommand)> {
        core::mem::take(&mut self.pending).into_iter()
    }
}

// ---------------------------------------------------------------------------
// FsmContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct FsmContext {
    // -- Timing --
    /// Per-state tick counter and phase flag.  Reset on every entry.
    pub blink: Blinker,

    // -- Input --
    /// Edges sampled at the start of this tick.
    pub buttons: ButtonSnapshot,

    // -- Encoder --
    pub accumulator: BitAccumulator,
    pub buffer: CharacterBuffer,

    // -- Standby --
    pub breathing: Breathing,
    /// State to return to when Standby exits.  Single slot, not a stack.
    pub previous: Option<StateId>,

    // -- Outputs --
    pub leds: LedFrame,
    pub events: Vec<EngineEvent, EVENT_OUTBOX_CAP>,

    // -- Configuration --
    pub config: EngineConfig,
    /// Blink half-periods in ticks, derived from `config`.
    pub idle_threshold: u32,
    pub entry_threshold: u32,
    pub complete_threshold: u32,
}

impl FsmContext {
    /// Create a new context with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        let breathing = Breathing::new(config.breathing_step, config.breathing_interval_ticks());
        Self {
            blink: Blinker::new(),
            buttons: ButtonSnapshot::none(),
            accumulator: BitAccumulator::new(),
            buffer: CharacterBuffer::new(),
            breathing,
            previous: None,
            leds: LedFrame::default(),
            events: Vec::new(),
            idle_threshold: config.half_period_ticks(config.idle_blink_hz),
            entry_threshold: config.half_period_ticks(config.entry_blink_hz),
            complete_threshold: config.half_period_ticks(config.complete_blink_hz),
            config,
        }
    }

    /// Queue an event for the service to forward after the tick.
    pub fn emit(&mut self, event: EngineEvent) {
        if let Err(dropped) = self.events.push(event) {
            log::debug!("event outbox full, dropping {:?}", dropped);
        }
    }

    pub fn pressed(&self, button: Button) -> bool {
        self.buttons.is_pressed(button)
    }
}
