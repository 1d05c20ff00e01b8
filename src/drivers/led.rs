//! Four-channel LED driver.
//!
//! One PWM channel per logical [`Led`].  Binary commands map to fully
//! on / fully off; brightness maps to a duty percentage.
//!
//! Writes after bring-up are fire-and-forget: a failing channel is logged
//! and the engine keeps running.

use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::app::ports::OutputSink;
use crate::error::InitError;
use crate::pattern::BRIGHTNESS_MAX;
use crate::types::Led;

pub struct LedBank<P> {
    channels: [P; Led::COUNT],
    /// Last brightness written per channel, in percent.
    current: [u8; Led::COUNT],
}

impl<P: SetDutyCycle> LedBank<P> {
    /// `channels` is indexed by [`Led::index`].
    pub fn new(channels: [P; Led::COUNT]) -> Self {
        Self {
            channels,
            current: [0; Led::COUNT],
        }
    }

    /// Last brightness written to `led`, in percent.
    pub fn level(&self, led: Led) -> u8 {
        self.current.get(led.index()).copied().unwrap_or(0)
    }

    fn write(&mut self, led: Led, percent: u8) -> Result<(), P::Error> {
        let idx = led.index();
        let Some(ch) = self.channels.get_mut(idx) else {
            return Ok(());
        };
        match percent {
            0 => ch.set_duty_cycle_fully_off()?,
            BRIGHTNESS_MAX => ch.set_duty_cycle_fully_on()?,
            p => ch.set_duty_cycle_percent(p)?,
        }
        if let Some(slot) = self.current.get_mut(idx) {
            *slot = percent;
        }
        Ok(())
    }

    fn write_logged(&mut self, led: Led, percent: u8) {
        if let Err(e) = self.write(led, percent) {
            warn!("LED {:?} write failed: {:?}", led, e);
        }
    }
}

impl<P: SetDutyCycle> OutputSink for LedBank<P> {
    /// Drive every channel off.  The first channel that refuses fails init.
    fn init(&mut self) -> Result<(), InitError> {
        for led in Led::ALL {
            self.write(led, 0).map_err(|e| {
                warn!("LED {:?} init failed: {:?}", led, e);
                InitError::Output(led)
            })?;
        }
        Ok(())
    }

    fn set_binary(&mut self, led: Led, on: bool) {
        self.write_logged(led, if on { BRIGHTNESS_MAX } else { 0 });
    }

    fn set_brightness(&mut self, led: Led, percent: u8) {
        self.write_logged(led, percent.min(BRIGHTNESS_MAX));
    }
}
