//! Engine configuration parameters
//!
//! Every timing value the state machine uses is expressed here in
//! milliseconds or hertz and converted to tick counts against the
//! configured call period, so the engine never hard-codes tick counts.

use serde::{Deserialize, Serialize};

use crate::error::InitError;

/// Core engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // --- Timing ---
    /// Period between `run_tick()` calls (milliseconds)
    pub tick_period_ms: u32,

    // --- Blink rates ---
    /// Heartbeat blink rate while entering the first character (Hz)
    pub idle_blink_hz: u32,
    /// Heartbeat blink rate while entering subsequent characters (Hz)
    pub entry_blink_hz: u32,
    /// Heartbeat blink rate once the string is complete (Hz)
    pub complete_blink_hz: u32,

    // --- Breathing ---
    /// Brightness units moved per breathing step (1-100)
    pub breathing_step: u8,
    /// Time between breathing steps (milliseconds)
    pub breathing_update_ms: u32,

    // --- Input ---
    /// Consecutive stable samples required before a press is latched.
    /// The A+B Standby gesture needs both latches to land on the same tick.
    pub debounce_ticks: u16,

    // --- Diagnostics ---
    /// Status snapshot interval (milliseconds, 0 = disabled)
    pub status_interval_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 1,

            idle_blink_hz: 1,
            entry_blink_hz: 4,
            complete_blink_hz: 16,

            breathing_step: 2,
            breathing_update_ms: 10,

            debounce_ticks: 20,

            status_interval_ms: 5_000,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON.  Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, InitError> {
        serde_json::from_str(json).map_err(|_| InitError::Config("malformed JSON"))
    }

    /// Range-check every field.  Called by the engine before any setup.
    pub fn validate(&self) -> Result<(), InitError> {
        if self.tick_period_ms == 0 {
            return Err(InitError::Config("tick_period_ms must be > 0"));
        }
        for (hz, field) in [
            (self.idle_blink_hz, "idle_blink_hz"),
            (self.entry_blink_hz, "entry_blink_hz"),
            (self.complete_blink_hz, "complete_blink_hz"),
        ] {
            if hz == 0 {
                return Err(InitError::Config(field));
            }
            // Half a period must span at least one tick or the blink aliases.
            if 1000 / (2 * u64::from(hz)) < u64::from(self.tick_period_ms) {
                return Err(InitError::Config(field));
            }
        }
        if !(1..=100).contains(&self.breathing_step) {
            return Err(InitError::Config("breathing_step must be 1-100"));
        }
        if self.breathing_update_ms < self.tick_period_ms {
            return Err(InitError::Config(
                "breathing_update_ms must be >= tick_period_ms",
            ));
        }
        Ok(())
    }

    /// Ticks in half a blink period at `hz`: 500 / 125 / 31 at the 1 ms default.
    pub fn half_period_ticks(&self, hz: u32) -> u32 {
        let per_tick = u64::from(self.tick_period_ms.max(1));
        let hz = u64::from(hz.max(1));
        (1000 / hz.saturating_mul(2).saturating_mul(per_tick)).max(1) as u32
    }

    /// Engine ticks between breathing steps.
    pub fn breathing_interval_ticks(&self) -> u16 {
        (self.breathing_update_ms / self.tick_period_ms.max(1)).clamp(1, u32::from(u16::MAX))
            as u16
    }

    /// Engine ticks between status snapshots, `None` when disabled.
    pub fn status_interval_ticks(&self) -> Option<u64> {
        if self.status_interval_ms == 0 {
            return None;
        }
        Some(u64::from(self.status_interval_ms / self.tick_period_ms.max(1)).max(1))
    }
}
