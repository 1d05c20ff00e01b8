//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the rules of the bit-entry device: FSM
//! orchestration, the encoder, and the outbound event stream.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
