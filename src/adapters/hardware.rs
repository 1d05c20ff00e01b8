//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`ButtonBank`] and [`LedBank`], exposing them through
//! [`InputEdgeSource`] and [`OutputSink`] as one value so the service can
//! take a single `&mut` for both.  Generic over the `embedded-hal` pin
//! types, so host tests drive it with mock pins.

use embedded_hal::digital::InputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::app::ports::{InputEdgeSource, OutputSink};
use crate::drivers::button::ButtonBank;
use crate::drivers::led::LedBank;
use crate::error::InitError;
use crate::types::{Button, Led};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<I, O> {
    buttons: ButtonBank<I>,
    leds: LedBank<O>,
}

impl<I: InputPin, O: SetDutyCycle> HardwareAdapter<I, O> {
    pub fn new(buttons: ButtonBank<I>, leds: LedBank<O>) -> Self {
        Self { buttons, leds }
    }

    pub fn buttons(&self) -> &ButtonBank<I> {
        &self.buttons
    }

    pub fn leds(&self) -> &LedBank<O> {
        &self.leds
    }
}

// ── InputEdgeSource implementation ────────────────────────────

impl<I: InputPin, O: SetDutyCycle> InputEdgeSource for HardwareAdapter<I, O> {
    fn init(&mut self) -> Result<(), InitError> {
        self.buttons.init()
    }

    fn pressed(&mut self, button: Button) -> bool {
        self.buttons.pressed(button)
    }
}

// ── OutputSink implementation ─────────────────────────────────

impl<I: InputPin, O: SetDutyCycle> OutputSink for HardwareAdapter<I, O> {
    fn init(&mut self) -> Result<(), InitError> {
        self.leds.init()
    }

    fn set_binary(&mut self, led: Led, on: bool) {
        self.leds.set_binary(led, on);
    }

    fn set_brightness(&mut self, led: Led, percent: u8) {
        self.leds.set_brightness(led, percent);
    }
}
