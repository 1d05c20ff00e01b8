//! Fixed-period outer loop.
//!
//! `initialize` once, then `run_tick` + sleep forever.  Any error stops the
//! loop and is handed back to the caller, which treats it as fatal.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::app::events::EngineEvent;
use crate::app::ports::{EventSink, InputEdgeSource, OutputSink};
use crate::app::service::EncoderService;
use crate::error::Result;

/// Drive `service` at its configured tick period.
///
/// `limit` bounds the number of ticks (host tests); `None` runs until an
/// error.  A status snapshot is emitted every `status_interval_ms`.
pub fn run(
    service: &mut EncoderService,
    io: &mut (impl InputEdgeSource + OutputSink),
    sink: &mut impl EventSink,
    delay: &mut impl DelayNs,
    limit: Option<u64>,
) -> Result<()> {
    service.initialize(io, sink)?;

    let period_ms = service.config().tick_period_ms;
    let status_every = service.config().status_interval_ticks();
    info!(
        "runner: {} ms tick, status every {:?} ticks",
        period_ms, status_every
    );

    let mut ticks: u64 = 0;
    while limit.is_none_or(|max| ticks < max) {
        service.run_tick(io, sink)?;
        ticks += 1;

        if status_every.is_some_and(|every| ticks % every == 0) {
            sink.emit(&EngineEvent::Status(service.status()));
        }

        delay.delay_ms(period_ms);
    }
    Ok(())
}
