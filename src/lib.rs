//! ledcoder firmware library.
//!
//! A tick-driven four-button, four-LED state machine that doubles as a
//! one-bit-per-press ASCII encoder.  Exposes the pure-logic modules for
//! integration testing; the ESP-IDF wiring lives in the `ledcoder` binary
//! behind the `espidf` feature.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod encoder;
pub mod error;
pub mod fsm;
pub mod pattern;
pub mod pins;
pub mod runner;
pub mod types;
