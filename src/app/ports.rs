//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ EncoderService (domain)
//! ```
//!
//! Driven adapters (buttons, LEDs, event sinks) implement these traits.
//! The [`EncoderService`](super::service::EncoderService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::error::InitError;
use crate::types::{Button, Led};

use super::events::EngineEvent;

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Press-and-clear edge source for the four logical buttons.
pub trait InputEdgeSource {
    /// Prepare the inputs.  Called once by `initialize`.
    fn init(&mut self) -> Result<(), InitError> {
        Ok(())
    }

    /// `true` at most once per physical press; reading clears the latch.
    fn pressed(&mut self, button: Button) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Fire-and-forget LED setters.
pub trait OutputSink {
    /// Prepare the outputs.  Called once by `initialize`, after inputs.
    fn init(&mut self) -> Result<(), InitError> {
        Ok(())
    }

    fn set_binary(&mut self, led: Led, on: bool);

    /// Brightness in percent, 0–100.
    fn set_brightness(&mut self, led: Led, percent: u8);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`EngineEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &EngineEvent);
}
