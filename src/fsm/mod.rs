//! Finite state machine engine.
//!
//! Closed-set dispatch over [`StateId`]:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  StateId            │ on_enter   │ on_update     │ on_exit    │
//! ├─────────────────────┼────────────┼───────────────┼────────────┤
//! │  IdleEntry          │ fn(ctx)    │ fn(ctx)->Opt  │ fn(ctx)    │
//! │  BitEntry           │ fn(ctx)    │ fn(ctx)->Opt  │ fn(ctx)    │
//! │  CharacterComplete  │ fn(ctx)    │ fn(ctx)->Opt  │ fn(ctx)    │
//! │  Standby            │ fn(ctx)    │ fn(ctx)->Opt  │ fn(ctx)    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each tick the engine calls `on_update` for the **current** state.
//! If it returns `Some(next_id)`, the engine runs `on_exit` for the
//! current state, then `on_enter` for the next, resets the per-state
//! tick counter, and updates the current state.  The three hooks are
//! `match`es in [`states`], so adding a state without handling it is a
//! compile error.

pub mod context;
pub mod states;

use context::FsmContext;
use log::info;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Enumeration of all possible engine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    /// Entering the first character.  Heartbeat blinks at 1 Hz.
    IdleEntry = 0,
    /// Entering subsequent characters.  Heartbeat blinks at 4 Hz.
    BitEntry = 1,
    /// String finished; only clear or Standby accepted.  Heartbeat at 16 Hz.
    CharacterComplete = 2,
    /// All LEDs breathe until any button returns to the previous state.
    Standby = 3,
}

impl StateId {
    pub const fn name(self) -> &'static str {
        match self {
            Self::IdleEntry => "IdleEntry",
            Self::BitEntry => "BitEntry",
            Self::CharacterComplete => "CharacterComplete",
            Self::Standby => "Standby",
        }
    }
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The finite state machine engine.
///
/// Holds only the current state identity; everything the handlers touch
/// lives in the [`FsmContext`] threaded through each call.
pub struct Fsm {
    current: StateId,
}

impl Fsm {
    /// Construct a new FSM starting in `initial`.  Call [`start`](Self::start) next.
    pub fn new(initial: StateId) -> Self {
        Self { current: initial }
    }

    /// Run the initial `on_enter` for the starting state.
    pub fn start(&mut self, ctx: &mut FsmContext) {
        info!("FSM starting in state: {}", self.current.name());
        ctx.blink.reset();
        states::on_enter(self.current, ctx);
    }

    /// Advance the FSM by one tick.
    ///
    /// 1. Call `on_update` for the current state.
    /// 2. If it returns `Some(next)`, execute the transition:
    ///    `on_exit(current)` → update state → `on_enter(next)`.
    ///
    /// Returns the state that was left, if a transition happened.
    pub fn tick(&mut self, ctx: &mut FsmContext) -> Option<StateId> {
        let next = states::on_update(self.current, ctx)?;
        let from = self.current;
        self.transition(next, ctx);
        Some(from)
    }

    /// The current state's identity.
    pub fn current_state(&self) -> StateId {
        self.current
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next: StateId, ctx: &mut FsmContext) {
        info!("FSM transition: {} -> {}", self.current.name(), next.name());

        states::on_exit(self.current, ctx);

        // Standby's only memory: where to go back to.
        if next == StateId::Standby {
            ctx.previous = Some(self.current);
        }

        self.current = next;
        ctx.blink.reset();

        states::on_enter(self.current, ctx);
    }
}
