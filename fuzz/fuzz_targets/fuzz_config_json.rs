//! Fuzz target: `EngineConfig::from_json` + `validate`
//!
//! Arbitrary text must either be rejected or yield a config whose
//! derived tick counts are all non-zero once validated.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use ledcoder::config::EngineConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = EngineConfig::from_json(text) else {
        return;
    };
    if config.validate().is_ok() {
        assert!(config.half_period_ticks(config.idle_blink_hz) >= 1);
        assert!(config.half_period_ticks(config.complete_blink_hz) >= 1);
        assert!(config.breathing_interval_ticks() >= 1);
    }
});
