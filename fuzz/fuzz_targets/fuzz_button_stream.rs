//! Fuzz target: `EncoderService::run_tick`
//!
//! Each input byte is one tick; its low nibble is the set of buttons
//! pressed on that tick (bit 0 = A ... bit 3 = D).  Asserts that the
//! engine never errors after initialisation, never exceeds its bounds,
//! and never asks for more than 100 % brightness.
//!
//! cargo fuzz run fuzz_button_stream

#![no_main]

use libfuzzer_sys::fuzz_target;
use ledcoder::app::events::EngineEvent;
use ledcoder::app::ports::{EventSink, InputEdgeSource, OutputSink};
use ledcoder::app::service::EncoderService;
use ledcoder::config::EngineConfig;
use ledcoder::encoder::{BITS_PER_CHAR, BUFFER_CAPACITY};
use ledcoder::fsm::StateId;
use ledcoder::types::{Button, Led};

struct ByteIo {
    mask: u8,
}

impl InputEdgeSource for ByteIo {
    fn pressed(&mut self, button: Button) -> bool {
        let bit = 1 << button.index();
        let hit = self.mask & bit != 0;
        self.mask &= !bit;
        hit
    }
}

impl OutputSink for ByteIo {
    fn set_binary(&mut self, _led: Led, _on: bool) {}

    fn set_brightness(&mut self, _led: Led, percent: u8) {
        assert!(percent <= 100, "brightness out of range");
    }
}

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &EngineEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let mut app = EncoderService::new(EngineConfig::default());
    let mut io = ByteIo { mask: 0 };
    let mut sink = NullSink;
    app.initialize(&mut io, &mut sink).expect("default config must initialise");

    for &byte in data {
        let before = app.state();
        io.mask = byte & 0x0F;
        app.run_tick(&mut io, &mut sink).expect("tick after init must succeed");

        let status = app.status();
        assert!(status.bit_count <= BITS_PER_CHAR);
        assert!(status.buffer_len <= BUFFER_CAPACITY);
        assert!(status.breathing_level <= 100);
        if app.state() == StateId::Standby {
            assert!(status.previous.is_some());
            assert_ne!(status.previous, Some(StateId::Standby));
        }
        if before == StateId::Standby && byte & 0x0F != 0 {
            assert_eq!(Some(app.state()), status.previous);
        }
    }
});
