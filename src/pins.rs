//! GPIO / peripheral pin assignments for the ledcoder board.
//!
//! Single source of truth for the board wiring.  `main` takes the
//! matching `peripherals.pins.gpioN` for each entry; keep the two in step.

// ---------------------------------------------------------------------------
// Buttons (active-low, internal pull-up)
// ---------------------------------------------------------------------------

/// Button A: shift in a 0.
pub const BUTTON_ZERO_GPIO: i32 = 4;
/// Button B: shift in a 1.
pub const BUTTON_ONE_GPIO: i32 = 5;
/// Button C: clear.
pub const BUTTON_CLEAR_GPIO: i32 = 6;
/// Button D: save.
pub const BUTTON_SAVE_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// LEDs (one LEDC channel each)
// ---------------------------------------------------------------------------

/// LED0: bit-0 indicator.
pub const LED_BIT_ZERO_GPIO: i32 = 10;
/// LED1: bit-1 indicator.
pub const LED_BIT_ONE_GPIO: i32 = 11;
/// LED2: heartbeat.
pub const LED_HEARTBEAT_GPIO: i32 = 12;
/// LED3: auxiliary.
pub const LED_AUX_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC frequency for the indicator LEDs (1 kHz, flicker-free).
pub const LED_PWM_FREQ_HZ: u32 = 1_000;
