//! Mock hardware for integration tests.
//!
//! Two layers:
//!
//! * `MockPin` / `MockPwm` / `MockDelay` implement the `embedded-hal`
//!   traits so the real `ButtonBank` / `LedBank` drivers can be exercised.
//!   Pin level and duty live behind `Rc<Cell<_>>` handles so a test can
//!   keep poking them after the driver owns the pin.
//! * `ScriptedIo` implements the port traits directly and records every
//!   output call, for engine-level scenarios.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorType as DigitalErrorType, InputPin};
use embedded_hal::pwm::{self, ErrorType as PwmErrorType, SetDutyCycle};

use ledcoder::app::events::EngineEvent;
use ledcoder::app::ports::{EventSink, InputEdgeSource, OutputSink};
use ledcoder::types::{Button, Led};

// ── MockPin ───────────────────────────────────────────────────

/// Active-low button pin.  `press()` pulls it low.
#[derive(Clone)]
pub struct MockPin {
    low: Rc<Cell<bool>>,
    fail: Rc<Cell<bool>>,
}

#[allow(dead_code)]
impl MockPin {
    pub fn new() -> Self {
        Self {
            low: Rc::new(Cell::new(false)),
            fail: Rc::new(Cell::new(false)),
        }
    }

    pub fn press(&self) {
        self.low.set(true);
    }

    pub fn release(&self) {
        self.low.set(false);
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.set(fail);
    }
}

impl DigitalErrorType for MockPin {
    type Error = digital::ErrorKind;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        if self.fail.get() {
            return Err(digital::ErrorKind::Other);
        }
        Ok(self.low.get())
    }
}

// ── MockPwm ───────────────────────────────────────────────────

pub const MOCK_MAX_DUTY: u16 = 1000;

/// PWM channel that remembers its last duty.
#[derive(Clone)]
pub struct MockPwm {
    duty: Rc<Cell<u16>>,
    writes: Rc<Cell<u32>>,
    fail: Rc<Cell<bool>>,
}

#[allow(dead_code)]
impl MockPwm {
    pub fn new() -> Self {
        Self {
            duty: Rc::new(Cell::new(u16::MAX)),
            writes: Rc::new(Cell::new(0)),
            fail: Rc::new(Cell::new(false)),
        }
    }

    pub fn duty(&self) -> u16 {
        self.duty.get()
    }

    pub fn writes(&self) -> u32 {
        self.writes.get()
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.set(fail);
    }
}

impl PwmErrorType for MockPwm {
    type Error = pwm::ErrorKind;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        MOCK_MAX_DUTY
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if self.fail.get() {
            return Err(pwm::ErrorKind::Other);
        }
        self.duty.set(duty);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

// ── MockDelay ─────────────────────────────────────────────────

/// Counts requested sleep time instead of sleeping.
#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
    pub ms_calls: u32,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.ms_calls += 1;
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

// ── ScriptedIo ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCall {
    Binary(Led, bool),
    Brightness(Led, u8),
}

/// Port-level mock: presses are queued per tick, outputs are recorded.
#[derive(Default)]
pub struct ScriptedIo {
    /// Buttons pressed on the next tick.  Consumed by reads.
    pub(crate) pending: Vec<Button>,
    /// Later ticks, one entry each.
    pub(crate) script: VecDeque<Vec<Button>>,
    pub calls: Vec<OutputCall>,
    pub reads: u32,
    pub fail_output_init: bool,
}

#[allow(dead_code)]
impl ScriptedIo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one tick with exactly `buttons` pressed.
    pub fn queue(&mut self, buttons: &[Button]) {
        self.script.push_back(buttons.to_vec());
    }

    /// Last binary/brightness call for `led`, if any.
    pub fn last_for(&self, led: Led) -> Option<OutputCall> {
        self.calls.iter().rev().copied().find(|c| match c {
            OutputCall::Binary(l, _) | OutputCall::Brightness(l, _) => *l == led,
        })
    }

    pub fn is_on(&self, led: Led) -> bool {
        matches!(
            self.last_for(led),
            Some(OutputCall::Binary(_, true)) | Some(OutputCall::Brightness(_, 1..))
        )
    }
}

impl InputEdgeSource for ScriptedIo {
    fn pressed(&mut self, button: Button) -> bool {
        // The first read of a tick (Button::Zero) pulls the next script entry.
        if button == Button::Zero {
            self.pending = self.script.pop_front().unwrap_or_default();
        }
        self.reads += 1;
        if let Some(pos) = self.pending.iter().position(|&b| b == button) {
            self.pending.remove(pos);
            true
        } else {
            false
        }
    }
}

impl OutputSink for ScriptedIo {
    fn init(&mut self) -> Result<(), ledcoder::error::InitError> {
        if self.fail_output_init {
            Err(ledcoder::error::InitError::Output(Led::Aux))
        } else {
            Ok(())
        }
    }

    fn set_binary(&mut self, led: Led, on: bool) {
        self.calls.push(OutputCall::Binary(led, on));
    }

    fn set_brightness(&mut self, led: Led, percent: u8) {
        self.calls.push(OutputCall::Brightness(led, percent));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<EngineEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                EngineEvent::CharacterSaved { byte, .. } => Some(*byte),
                _ => None,
            })
            .collect()
    }

    pub fn status_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, EngineEvent::Status(_)))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &EngineEvent) {
        self.events.push(event.clone());
    }
}
