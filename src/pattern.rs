//! Tick-counted LED patterns.
//!
//! | Pattern     | Output                        | Rate source                 |
//! |-------------|-------------------------------|-----------------------------|
//! | [`Blinker`]   | On/off square wave (one LED)  | half-period in ticks        |
//! | [`Breathing`] | Triangular 0→100→0 brightness | one step per N ticks        |
//!
//! Both are advanced by the FSM once per engine tick; neither reads a clock.

/// Upper bound of the brightness scale (percent).
pub const BRIGHTNESS_MAX: u8 = 100;

/// Lower bound of the brightness scale (percent).
pub const BRIGHTNESS_MIN: u8 = 0;

// ---------------------------------------------------------------------------
// Blinker
// ---------------------------------------------------------------------------

/// Per-state tick counter and phase flag.
///
/// Reset on every state entry.  Toggles its phase each time the counter
/// reaches the caller's half-period threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blinker {
    counter: u32,
    phase: bool,
}

impl Blinker {
    pub const fn new() -> Self {
        Self {
            counter: 0,
            phase: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Count one tick.  Returns the new phase when it toggles.
    pub fn tick(&mut self, threshold: u32) -> Option<bool> {
        self.counter += 1;
        if self.counter >= threshold {
            self.counter = 0;
            self.phase = !self.phase;
            Some(self.phase)
        } else {
            None
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn phase(&self) -> bool {
        self.phase
    }
}

// ---------------------------------------------------------------------------
// Breathing
// ---------------------------------------------------------------------------

/// Triangular brightness ramp shared by all four LEDs in Standby.
///
/// Rate-limited internally: [`advance`](Self::advance) is called every tick
/// but only moves the level once per `interval` calls.  A step that would
/// cross a bound lands exactly on it and reverses direction in the same
/// step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breathing {
    level: u8,
    rising: bool,
    sub_ticks: u16,
    step: u8,
    interval: u16,
}

impl Breathing {
    pub fn new(step: u8, interval: u16) -> Self {
        Self {
            level: BRIGHTNESS_MIN,
            rising: true,
            sub_ticks: 0,
            step: step.clamp(1, BRIGHTNESS_MAX),
            interval: interval.max(1),
        }
    }

    /// Count one engine tick.  Returns the new level when it changes.
    pub fn advance(&mut self) -> Option<u8> {
        self.sub_ticks += 1;
        if self.sub_ticks < self.interval {
            return None;
        }
        self.sub_ticks = 0;
        self.step_once();
        Some(self.level)
    }

    /// Move one step immediately, ignoring the rate limiter.
    pub fn step_once(&mut self) {
        if self.rising {
            let next = self.level.saturating_add(self.step);
            if next >= BRIGHTNESS_MAX {
                self.level = BRIGHTNESS_MAX;
                self.rising = false;
            } else {
                self.level = next;
            }
        } else {
            let next = self.level.saturating_sub(self.step);
            if next == BRIGHTNESS_MIN {
                self.level = BRIGHTNESS_MIN;
                self.rising = true;
            } else {
                self.level = next;
            }
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_rising(&self) -> bool {
        self.rising
    }
}
