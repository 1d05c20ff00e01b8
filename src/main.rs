//! ledcoder firmware — main entry point.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                  │
//! │                                                        │
//! │  HardwareAdapter                 LogEventSink          │
//! │  (ButtonBank + LedBank)          (EventSink)           │
//! │                                                        │
//! │  ──────────── Port Trait Boundary ────────────         │
//! │                                                        │
//! │  ┌──────────────────────────────────────────────┐      │
//! │  │        EncoderService (pure logic)           │      │
//! │  │  FSM · BitAccumulator · Breathing            │      │
//! │  └──────────────────────────────────────────────┘      │
//! │                                                        │
//! │  runner::run (fixed-period loop, FreeRTOS delay)       │
//! └────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyInputPin, Input, InputPin, PinDriver, Pull};
use esp_idf_hal::ledc::{LedcDriver, LedcTimerDriver, config::TimerConfig};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::FromValueType;
use log::{error, info};

use ledcoder::adapters::hardware::HardwareAdapter;
use ledcoder::adapters::log_sink::LogEventSink;
use ledcoder::app::service::EncoderService;
use ledcoder::config::EngineConfig;
use ledcoder::drivers::button::ButtonBank;
use ledcoder::drivers::led::LedBank;
use ledcoder::{pins, runner};

fn button(pin: AnyInputPin) -> Result<PinDriver<'static, AnyInputPin, Input>> {
    let mut driver = PinDriver::input(pin)?;
    driver.set_pull(Pull::Up)?;
    Ok(driver)
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("ledcoder v{}", env!("CARGO_PKG_VERSION"));

    let config = EngineConfig::default();
    let peripherals = Peripherals::take()?;
    let pins_in = peripherals.pins;

    // ── 2. Buttons (A, B, C, D) ───────────────────────────────
    // GPIO numbers must match `pins::BUTTON_*_GPIO`.
    let buttons = ButtonBank::new(
        [
            button(pins_in.gpio4.downgrade_input())?,
            button(pins_in.gpio5.downgrade_input())?,
            button(pins_in.gpio6.downgrade_input())?,
            button(pins_in.gpio7.downgrade_input())?,
        ],
        config.debounce_ticks,
    );

    // ── 3. LEDs (LED0-LED3 on one LEDC timer) ─────────────────
    // GPIO numbers must match `pins::LED_*_GPIO`.
    let timer = LedcTimerDriver::new(
        peripherals.ledc.timer0,
        &TimerConfig::default().frequency(pins::LED_PWM_FREQ_HZ.Hz()),
    )?;
    let leds = LedBank::new([
        LedcDriver::new(peripherals.ledc.channel0, &timer, pins_in.gpio10)?,
        LedcDriver::new(peripherals.ledc.channel1, &timer, pins_in.gpio11)?,
        LedcDriver::new(peripherals.ledc.channel2, &timer, pins_in.gpio12)?,
        LedcDriver::new(peripherals.ledc.channel3, &timer, pins_in.gpio13)?,
    ]);

    let mut hw = HardwareAdapter::new(buttons, leds);
    let mut sink = LogEventSink::new();
    let mut service = EncoderService::new(config);
    let mut delay = FreeRtos;

    // ── 4. Run until the engine reports an error ──────────────
    if let Err(e) = runner::run(&mut service, &mut hw, &mut sink, &mut delay, None) {
        // Nothing to recover to; stay parked so the log stays readable.
        error!("engine halted: {e}");
        loop {
            FreeRtos::delay_ms(1_000);
        }
    }
    Ok(())
}
