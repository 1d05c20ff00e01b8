//! Integration tests for the `embedded-hal` drivers and the hardware
//! adapter, using mock pins and PWM channels.

use super::mock_hw::{MOCK_MAX_DUTY, MockPin, MockPwm, RecordingSink};

use ledcoder::adapters::hardware::HardwareAdapter;
use ledcoder::app::ports::{InputEdgeSource, OutputSink};
use ledcoder::app::service::EncoderService;
use ledcoder::config::EngineConfig;
use ledcoder::drivers::button::ButtonBank;
use ledcoder::drivers::led::LedBank;
use ledcoder::error::{Error, InitError};
use ledcoder::fsm::StateId;
use ledcoder::types::{Button, Led};

fn pins() -> [MockPin; 4] {
    [MockPin::new(), MockPin::new(), MockPin::new(), MockPin::new()]
}

fn pwms() -> [MockPwm; 4] {
    [MockPwm::new(), MockPwm::new(), MockPwm::new(), MockPwm::new()]
}

// ── ButtonBank ────────────────────────────────────────────────

#[test]
fn press_reported_once_after_debounce() {
    let p = pins();
    let mut bank = ButtonBank::new(p.clone(), 20);
    bank.init().unwrap();

    p[1].press();
    let reports: Vec<bool> = (0..100).map(|_| bank.pressed(Button::One)).collect();
    assert_eq!(reports.iter().filter(|&&r| r).count(), 1);
    assert!(reports[19]);
    assert!(bank.is_held(Button::One));
    assert!(!bank.is_held(Button::Zero));
}

#[test]
fn staggered_presses_latch_on_different_ticks() {
    let p = pins();
    let mut bank = ButtonBank::new(p.clone(), 3);
    bank.init().unwrap();

    let mut zero_at = None;
    let mut one_at = None;
    p[0].press();
    for tick in 0..6 {
        if tick == 1 {
            p[1].press();
        }
        if bank.pressed(Button::Zero) {
            zero_at = Some(tick);
        }
        if bank.pressed(Button::One) {
            one_at = Some(tick);
        }
    }
    // One tick apart on the pins stays one tick apart at the port.
    assert_eq!(zero_at, Some(2));
    assert_eq!(one_at, Some(3));
}

#[test]
fn simultaneous_presses_latch_together() {
    let p = pins();
    let mut bank = ButtonBank::new(p.clone(), 3);
    bank.init().unwrap();

    p[0].press();
    p[1].press();
    for _ in 0..2 {
        assert!(!bank.pressed(Button::Zero));
        assert!(!bank.pressed(Button::One));
    }
    assert!(bank.pressed(Button::Zero));
    assert!(bank.pressed(Button::One));
}

#[test]
fn release_rearms_the_button() {
    let p = pins();
    let mut bank = ButtonBank::new(p.clone(), 3);
    bank.init().unwrap();

    p[3].press();
    assert!((0..3).any(|_| bank.pressed(Button::Save)));
    p[3].release();
    for _ in 0..3 {
        assert!(!bank.pressed(Button::Save));
    }
    p[3].press();
    assert!((0..3).any(|_| bank.pressed(Button::Save)));
}

#[test]
fn short_glitch_is_filtered() {
    let p = pins();
    let mut bank = ButtonBank::new(p.clone(), 5);
    bank.init().unwrap();

    p[2].press();
    for _ in 0..4 {
        assert!(!bank.pressed(Button::Clear));
    }
    p[2].release();
    for _ in 0..10 {
        assert!(!bank.pressed(Button::Clear));
    }
}

#[test]
fn button_held_at_boot_must_be_released_first() {
    let p = pins();
    p[0].press();
    let mut bank = ButtonBank::new(p.clone(), 2);
    bank.init().unwrap();

    for _ in 0..10 {
        assert!(!bank.pressed(Button::Zero));
    }
    p[0].release();
    bank.pressed(Button::Zero);
    bank.pressed(Button::Zero);
    p[0].press();
    assert!(!bank.pressed(Button::Zero));
    assert!(bank.pressed(Button::Zero));
}

#[test]
fn unreadable_pin_fails_init() {
    let p = pins();
    p[2].set_failing(true);
    let mut bank = ButtonBank::new(p, 1);
    assert_eq!(bank.init(), Err(InitError::Input(Button::Clear)));
}

#[test]
fn read_error_after_init_counts_as_released() {
    let p = pins();
    let mut bank = ButtonBank::new(p.clone(), 1);
    bank.init().unwrap();
    p[0].press();
    p[0].set_failing(true);
    assert!(!bank.pressed(Button::Zero));
}

// ── LedBank ───────────────────────────────────────────────────

#[test]
fn init_drives_every_channel_off() {
    let c = pwms();
    let mut bank = LedBank::new(c.clone());
    bank.init().unwrap();
    for ch in &c {
        assert_eq!(ch.duty(), 0);
        assert_eq!(ch.writes(), 1);
    }
}

#[test]
fn binary_and_brightness_map_to_duty() {
    let c = pwms();
    let mut bank = LedBank::new(c.clone());
    bank.init().unwrap();

    bank.set_binary(Led::Heartbeat, true);
    assert_eq!(c[2].duty(), MOCK_MAX_DUTY);
    bank.set_brightness(Led::Aux, 40);
    assert_eq!(c[3].duty(), 400);
    assert_eq!(bank.level(Led::Aux), 40);
    bank.set_brightness(Led::Aux, 250);
    assert_eq!(c[3].duty(), MOCK_MAX_DUTY);
    assert_eq!(bank.level(Led::Aux), 100);
    bank.set_binary(Led::Heartbeat, false);
    assert_eq!(c[2].duty(), 0);
}

#[test]
fn failing_channel_fails_init() {
    let c = pwms();
    c[1].set_failing(true);
    let mut bank = LedBank::new(c);
    assert_eq!(bank.init(), Err(InitError::Output(Led::BitOne)));
}

#[test]
fn runtime_write_failure_is_absorbed() {
    let c = pwms();
    let mut bank = LedBank::new(c.clone());
    bank.init().unwrap();
    c[0].set_failing(true);
    bank.set_binary(Led::BitZero, true);
    assert_eq!(c[0].duty(), 0);
    assert_eq!(bank.level(Led::BitZero), 0);
}

// ── HardwareAdapter + EncoderService ──────────────────────────

#[test]
fn pin_press_reaches_led_duty() {
    let p = pins();
    let c = pwms();
    let config = EngineConfig {
        debounce_ticks: 2,
        ..EngineConfig::default()
    };
    let mut hw = HardwareAdapter::new(
        ButtonBank::new(p.clone(), config.debounce_ticks),
        LedBank::new(c.clone()),
    );
    let mut app = EncoderService::new(config);
    let mut sink = RecordingSink::new();
    app.initialize(&mut hw, &mut sink).unwrap();

    p[1].press();
    app.run_tick(&mut hw, &mut sink).unwrap();
    assert_eq!(app.status().bit_count, 0);
    app.run_tick(&mut hw, &mut sink).unwrap();
    assert_eq!(app.status().bit_count, 1);
    assert_eq!(c[1].duty(), MOCK_MAX_DUTY);
    assert_eq!(c[0].duty(), 0);
    assert_eq!(hw.leds().level(Led::BitOne), 100);

    // Holding keeps it a single press.
    for _ in 0..50 {
        app.run_tick(&mut hw, &mut sink).unwrap();
    }
    assert_eq!(app.status().bit_count, 1);
    assert!(hw.buttons().is_held(Button::One));
}

#[test]
fn held_bit_buttons_enter_standby() {
    let p = pins();
    let c = pwms();
    let mut hw = HardwareAdapter::new(ButtonBank::new(p.clone(), 1), LedBank::new(c.clone()));
    let mut app = EncoderService::new(EngineConfig::default());
    let mut sink = RecordingSink::new();
    app.initialize(&mut hw, &mut sink).unwrap();

    p[0].press();
    p[1].press();
    app.run_tick(&mut hw, &mut sink).unwrap();
    assert_eq!(app.state(), StateId::Standby);
}

#[test]
fn adapter_init_failure_surfaces_from_service() {
    let p = pins();
    let c = pwms();
    c[3].set_failing(true);
    let mut hw = HardwareAdapter::new(ButtonBank::new(p, 1), LedBank::new(c));
    let mut app = EncoderService::new(EngineConfig::default());
    let mut sink = RecordingSink::new();
    assert_eq!(
        app.initialize(&mut hw, &mut sink),
        Err(Error::Init(InitError::Output(Led::Aux)))
    );
}
