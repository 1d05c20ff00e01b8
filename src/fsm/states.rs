//! Concrete state handlers.
//!
//! Each hook is a `match` over [`StateId`]; each arm calls a plain `fn`
//! taking `&mut FsmContext`.  No closures, no dynamic dispatch, no heap.
//!
//! ```text
//!              ┌──[C: clear bits]──┐
//!              ▼                   │
//!  ──▶ IDLE_ENTRY (1 Hz) ──────────┘
//!        │     ▲   ▲
//!       [D]   [C] [C]
//!        ▼     │   │
//!      BIT_ENTRY (4 Hz) ──[D]──▶ CHARACTER_COMPLETE (16 Hz)
//!
//!  Any of the three ──[A+B]──▶ STANDBY ──[any button]──▶ previous state
//! ```
//!
//! A/B shift a 0/1 into the accumulator, C clears, D saves.  Every
//! decision reads the tick's [`ButtonSnapshot`](super::context::ButtonSnapshot);
//! the A+B gesture is tested first so it never doubles as bit input.

use log::{debug, info, warn};

use super::StateId;
use super::context::{FsmContext, LedCommand};
use crate::app::events::EngineEvent;
use crate::encoder::{InsertOutcome, SaveOutcome};
use crate::types::{Button, Led};

// ═══════════════════════════════════════════════════════════════════════════
//  Dispatch
// ═══════════════════════════════════════════════════════════════════════════

pub fn on_enter(state: StateId, ctx: &mut FsmContext) {
    match state {
        StateId::IdleEntry => idle_entry_enter(ctx),
        StateId::BitEntry => bit_entry_enter(ctx),
        StateId::CharacterComplete => complete_enter(ctx),
        StateId::Standby => standby_enter(ctx),
    }
}

pub fn on_update(state: StateId, ctx: &mut FsmContext) -> Option<StateId> {
    match state {
        StateId::IdleEntry => idle_entry_update(ctx),
        StateId::BitEntry => bit_entry_update(ctx),
        StateId::CharacterComplete => complete_update(ctx),
        StateId::Standby => standby_update(ctx),
    }
}

pub fn on_exit(state: StateId, ctx: &mut FsmContext) {
    match state {
        StateId::IdleEntry | StateId::BitEntry | StateId::CharacterComplete => {}
        StateId::Standby => standby_exit(ctx),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  IDLE_ENTRY: first character, accumulator starts empty
// ═══════════════════════════════════════════════════════════════════════════

fn idle_entry_enter(ctx: &mut FsmContext) {
    ctx.leds.all(LedCommand::Off);
    if ctx.accumulator.count() > 0 {
        ctx.emit(EngineEvent::AccumulatorCleared);
    }
    ctx.accumulator.clear();
    info!("IDLE_ENTRY: enter bits with A=0 B=1, C clears, D saves");
}

fn idle_entry_update(ctx: &mut FsmContext) -> Option<StateId> {
    if ctx.buttons.standby_combo() {
        return Some(StateId::Standby);
    }

    insert_pressed_bits(ctx);

    if ctx.pressed(Button::Clear) {
        clear_accumulator(ctx);
        info!("IDLE_ENTRY: cleared the bits entered so far");
        return None;
    }

    if ctx.pressed(Button::Save) {
        save_character(ctx);
        return Some(StateId::BitEntry);
    }

    let threshold = ctx.idle_threshold;
    blink(ctx, threshold);
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  BIT_ENTRY: subsequent characters
// ═══════════════════════════════════════════════════════════════════════════

fn bit_entry_enter(ctx: &mut FsmContext) {
    ctx.leds.all(LedCommand::Off);
    info!(
        "BIT_ENTRY: {} character(s) saved, C now clears the whole string",
        ctx.buffer.len()
    );
}

fn bit_entry_update(ctx: &mut FsmContext) -> Option<StateId> {
    // Combo before C: A+B+C on one tick enters Standby, not a clear.
    if ctx.buttons.standby_combo() {
        return Some(StateId::Standby);
    }

    if ctx.pressed(Button::Clear) {
        clear_string(ctx);
        return Some(StateId::IdleEntry);
    }

    insert_pressed_bits(ctx);

    if ctx.pressed(Button::Save) {
        save_character(ctx);
        return Some(StateId::CharacterComplete);
    }

    let threshold = ctx.entry_threshold;
    blink(ctx, threshold);
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  CHARACTER_COMPLETE: string finished, waiting for clear or standby
// ═══════════════════════════════════════════════════════════════════════════

fn complete_enter(ctx: &mut FsmContext) {
    ctx.leds.all(LedCommand::Off);
    info!("CHARACTER_COMPLETE: string \"{}\"", ctx.buffer);
}

fn complete_update(ctx: &mut FsmContext) -> Option<StateId> {
    if ctx.buttons.standby_combo() {
        return Some(StateId::Standby);
    }

    if ctx.pressed(Button::Clear) {
        clear_string(ctx);
        return Some(StateId::IdleEntry);
    }

    let threshold = ctx.complete_threshold;
    blink(ctx, threshold);
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  STANDBY: all LEDs breathe; any button resumes
// ═══════════════════════════════════════════════════════════════════════════

fn standby_enter(ctx: &mut FsmContext) {
    info!(
        "STANDBY: breathing, any button returns to {:?}",
        ctx.previous
    );
}

fn standby_exit(ctx: &mut FsmContext) {
    info!("STANDBY: resuming at brightness {}", ctx.breathing.level());
}

fn standby_update(ctx: &mut FsmContext) -> Option<StateId> {
    if ctx.buttons.any() {
        // `previous` is always set by the transition into Standby.
        return Some(ctx.previous.unwrap_or(StateId::IdleEntry));
    }

    if let Some(level) = ctx.breathing.advance() {
        ctx.leds.all(LedCommand::Level(level));
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  Shared actions
// ═══════════════════════════════════════════════════════════════════════════

/// Toggle the heartbeat LED every `threshold` ticks.
fn blink(ctx: &mut FsmContext, threshold: u32) {
    if let Some(phase) = ctx.blink.tick(threshold) {
        ctx.leds.set_binary(Led::Heartbeat, phase);
    }
}

fn insert_pressed_bits(ctx: &mut FsmContext) {
    if ctx.pressed(Button::Zero) {
        insert_bit(ctx, 0);
    }
    if ctx.pressed(Button::One) {
        insert_bit(ctx, 1);
    }
}

/// Shift one bit in and show it on the indicator pair.
fn insert_bit(ctx: &mut FsmContext, bit: u8) {
    match ctx.accumulator.insert_bit(bit) {
        InsertOutcome::Inserted { bit, count } => {
            ctx.leds.set_binary(Led::BitZero, bit == 0);
            ctx.leds.set_binary(Led::BitOne, bit == 1);
            debug!("bit {} accepted ({}/8)", bit, count);
            ctx.emit(EngineEvent::BitInserted { bit, count });
        }
        InsertOutcome::Full => {
            ctx.leds.set_binary(Led::BitZero, true);
            ctx.leds.set_binary(Led::BitOne, true);
            ctx.emit(EngineEvent::AccumulatorFull);
        }
    }
}

fn clear_accumulator(ctx: &mut FsmContext) {
    ctx.accumulator.clear();
    ctx.leds.set_binary(Led::BitZero, false);
    ctx.leds.set_binary(Led::BitOne, false);
    ctx.emit(EngineEvent::AccumulatorCleared);
}

fn clear_string(ctx: &mut FsmContext) {
    clear_accumulator(ctx);
    ctx.buffer.clear();
    ctx.emit(EngineEvent::BufferCleared);
    info!("string cleared");
}

fn save_character(ctx: &mut FsmContext) {
    match ctx.accumulator.save_if_complete(&mut ctx.buffer) {
        SaveOutcome::Saved { byte, len } => {
            ctx.leds.set_binary(Led::BitZero, false);
            ctx.leds.set_binary(Led::BitOne, false);
            info!(
                "saved {:?} (0x{:02X}), string \"{}\"",
                char::from(byte),
                byte,
                ctx.buffer
            );
            ctx.emit(EngineEvent::CharacterSaved { byte, len });
        }
        SaveOutcome::Dropped { byte } => {
            ctx.leds.set_binary(Led::BitZero, false);
            ctx.leds.set_binary(Led::BitOne, false);
            warn!("string full, dropped 0x{:02X}", byte);
            ctx.emit(EngineEvent::CharacterDropped(byte));
        }
        SaveOutcome::Incomplete { count } => {
            ctx.leds.set_binary(Led::BitZero, true);
            ctx.leds.set_binary(Led::BitOne, true);
            warn!("save ignored, only {}/8 bits entered", count);
            ctx.emit(EngineEvent::SaveIncomplete { count });
        }
    }
}
