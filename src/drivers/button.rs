//! Polled, tick-debounced button bank.
//!
//! ## Hardware
//!
//! Four active-low momentary switches with pull-ups, one per logical
//! [`Button`].  Each read of [`InputEdgeSource::pressed`] samples that
//! button's pin once and runs the debounce state machine one step.
//!
//! ## Debounce
//!
//! | State      | Pin low for N samples      | Pin high for N samples |
//! |------------|----------------------------|------------------------|
//! | `Released` | → `Held`, latch the press  | stay                   |
//! | `Held`     | stay                       | → `Released`           |
//!
//! `N` is `debounce_ticks`.  A bounce resets the run.  The latch is set
//! once per physical press and cleared by the read that reports it.

use embedded_hal::digital::InputPin;
use log::{debug, warn};

use crate::app::ports::InputEdgeSource;
use crate::error::InitError;
use crate::types::Button;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Released,
    Held,
}

/// Per-button debounce state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Debounce {
    level: Level,
    /// Consecutive samples disagreeing with `level`.
    run: u16,
    latched: bool,
}

impl Debounce {
    const fn new() -> Self {
        Self {
            level: Level::Released,
            run: 0,
            latched: false,
        }
    }

    /// Feed one sample.  Returns `true` when a press is accepted.
    fn sample(&mut self, active: bool, threshold: u16) -> bool {
        let disagrees = match self.level {
            Level::Released => active,
            Level::Held => !active,
        };
        if !disagrees {
            self.run = 0;
            return false;
        }

        self.run = self.run.saturating_add(1);
        if self.run < threshold {
            return false;
        }

        self.run = 0;
        match self.level {
            Level::Released => {
                self.level = Level::Held;
                self.latched = true;
                true
            }
            Level::Held => {
                self.level = Level::Released;
                false
            }
        }
    }

    fn take(&mut self) -> bool {
        core::mem::replace(&mut self.latched, false)
    }
}

/// Four debounced, latching buttons over `embedded-hal` input pins.
///
/// Each button latches independently, so two presses only count as
/// simultaneous when their debounce windows finish on the same tick.
pub struct ButtonBank<P> {
    pins: [P; Button::COUNT],
    state: [Debounce; Button::COUNT],
    threshold: u16,
}

impl<P: InputPin> ButtonBank<P> {
    /// `pins` is indexed by [`Button::index`].  A `debounce_ticks` of 0
    /// accepts a press on the first low sample.
    pub fn new(pins: [P; Button::COUNT], debounce_ticks: u16) -> Self {
        Self {
            pins,
            state: [Debounce::new(); Button::COUNT],
            threshold: debounce_ticks.max(1),
        }
    }

    /// Sample `button` once.  A read error counts as released.
    pub fn poll(&mut self, button: Button) {
        let idx = button.index();
        let (Some(pin), Some(state)) = (self.pins.get_mut(idx), self.state.get_mut(idx)) else {
            return;
        };
        let active = match pin.is_low() {
            Ok(low) => low,
            Err(e) => {
                warn!("button {:?} read failed: {:?}", button, e);
                false
            }
        };
        if state.sample(active, self.threshold) {
            debug!("button {:?} pressed", button);
        }
    }

    /// Whether `button` is currently debounced as held down.
    pub fn is_held(&self, button: Button) -> bool {
        self.state
            .get(button.index())
            .is_some_and(|s| s.level == Level::Held)
    }
}

impl<P: InputPin> InputEdgeSource for ButtonBank<P> {
    /// Probe every pin.  A button already held at boot starts as `Held`
    /// without latching, so it must be released before it counts.
    fn init(&mut self) -> Result<(), InitError> {
        for button in Button::ALL {
            let idx = button.index();
            let (Some(pin), Some(state)) = (self.pins.get_mut(idx), self.state.get_mut(idx))
            else {
                continue;
            };
            let low = pin.is_low().map_err(|e| {
                warn!("button {:?} probe failed: {:?}", button, e);
                InitError::Input(button)
            })?;
            *state = Debounce::new();
            if low {
                state.level = Level::Held;
            }
        }
        Ok(())
    }

    fn pressed(&mut self, button: Button) -> bool {
        self.poll(button);
        self.state
            .get_mut(button.index())
            .is_some_and(Debounce::take)
    }
}
