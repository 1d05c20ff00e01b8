//! Application service — the hexagonal core.
//!
//! [`EncoderService`] owns the FSM and its shared context.  It exposes a
//! clean, hardware-agnostic API.  All I/O flows through port traits
//! injected at call sites, making the entire service testable with mock
//! adapters.
//!
//! ```text
//!  InputEdgeSource ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                      │     EncoderService     │
//!     OutputSink   ◀── │  FSM · Encoder · Patt. │
//!                      └────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::EngineConfig;
use crate::encoder::CharacterBuffer;
use crate::error::{FatalError, Result};
use crate::fsm::context::{ButtonSnapshot, FsmContext, LedCommand};
use crate::fsm::{Fsm, StateId};
use crate::types::Button;

use super::events::{EngineEvent, EngineStatus};
use super::ports::{EventSink, InputEdgeSource, OutputSink};

// ───────────────────────────────────────────────────────────────
// EncoderService
// ───────────────────────────────────────────────────────────────

/// The engine: one FSM, one context, one tick at a time.
pub struct EncoderService {
    fsm: Fsm,
    ctx: FsmContext,
    initialized: bool,
    tick_count: u64,
}

impl EncoderService {
    /// Construct the service from configuration.
    ///
    /// Does **not** touch hardware; call [`initialize`](Self::initialize) next.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            fsm: Fsm::new(StateId::IdleEntry),
            ctx: FsmContext::new(config),
            initialized: false,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Validate config, bring up inputs then outputs, and enter `IdleEntry`.
    ///
    /// On error nothing is started and the service stays uninitialised.
    /// A second call after success is a no-op.
    pub fn initialize(
        &mut self,
        io: &mut (impl InputEdgeSource + OutputSink),
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if self.initialized {
            debug!("initialize called twice, ignoring");
            return Ok(());
        }

        self.ctx.config.validate()?;
        InputEdgeSource::init(&mut *io)?;
        OutputSink::init(&mut *io)?;

        self.fsm.start(&mut self.ctx);
        self.initialized = true;
        self.flush(io, sink);
        sink.emit(&EngineEvent::Started(self.fsm.current_state()));
        info!("EncoderService started in {:?}", self.fsm.current_state());
        Ok(())
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one tick: sample buttons → FSM → LEDs → events.
    ///
    /// The `io` parameter satisfies **both** [`InputEdgeSource`] and
    /// [`OutputSink`], so one board adapter can own every pin.
    pub fn run_tick(
        &mut self,
        io: &mut (impl InputEdgeSource + OutputSink),
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if !self.initialized {
            return Err(FatalError::NotInitialized.into());
        }
        self.tick_count += 1;

        // 1. One read per button; every decision below reuses it.
        let mut snapshot = ButtonSnapshot::none();
        for button in Button::ALL {
            snapshot.set(button, io.pressed(button));
        }
        self.ctx.buttons = snapshot;

        // 2. FSM tick (pure state logic)
        let left = self.fsm.tick(&mut self.ctx);
        self.ctx.buttons = ButtonSnapshot::none();

        // 3. Apply LED commands and forward handler events
        self.flush(io, sink);

        // 4. Emit state change if the FSM moved
        if let Some(from) = left {
            sink.emit(&EngineEvent::StateChanged {
                from,
                to: self.fsm.current_state(),
            });
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a status snapshot from the current context.
    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            state: self.fsm.current_state(),
            previous: self.ctx.previous,
            register: self.ctx.accumulator.value(),
            bit_count: self.ctx.accumulator.count(),
            buffer_len: self.ctx.buffer.len(),
            buffer: self.ctx.buffer.clone(),
            breathing_level: self.ctx.breathing.level(),
        }
    }

    /// Current FSM state.
    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// Characters saved so far.
    pub fn buffer(&self) -> &CharacterBuffer {
        &self.ctx.buffer
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Ticks executed since `initialize`.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// The live configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.ctx.config
    }

    // ── Internal ──────────────────────────────────────────────

    /// Translate pending LED commands into port calls and drain the outbox.
    fn flush(&mut self, io: &mut impl OutputSink, sink: &mut impl EventSink) {
        for (led, cmd) in self.ctx.leds.drain() {
            match cmd {
                LedCommand::Off => io.set_binary(led, false),
                LedCommand::On => io.set_binary(led, true),
                LedCommand::Level(level) => io.set_brightness(led, level),
            }
        }
        for event in self.ctx.events.iter() {
            sink.emit(event);
        }
        self.ctx.events.clear();
    }
}
