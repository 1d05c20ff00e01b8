//! Unified error types for the ledcoder firmware.
//!
//! A single `Error` enum that the engine entry points return, so the outer
//! loop treats every failure the same way: log it and halt.  All variants
//! are `Copy`; nothing here allocates.
//!
//! The engine itself has very few failure modes.  Buffer overflow and
//! accumulator overrun are absorbed as saturating behaviour (see
//! [`crate::encoder`]) and never surface here.

use core::fmt;

use crate::types::{Button, Led};

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible engine operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `initialize()` could not bring up a collaborator or the config is bad.
    Init(InitError),
    /// `run_tick()` hit a condition the loop cannot continue from.
    Fatal(FatalError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Fatal(e) => write!(f, "fatal: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Initialisation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// A button input could not be read during bring-up.
    Input(Button),
    /// An LED channel rejected its initial "off" write.
    Output(Led),
    /// Configuration failed validation.  Carries the offending field.
    Config(&'static str),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(button) => write!(f, "button {button:?} input unavailable"),
            Self::Output(led) => write!(f, "LED {led:?} output unavailable"),
            Self::Config(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl From<InitError> for Error {
    fn from(e: InitError) -> Self {
        Self::Init(e)
    }
}

// ---------------------------------------------------------------------------
// Fatal run-time errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatalError {
    /// `run_tick()` was called before a successful `initialize()`.
    NotInitialized,
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "engine ticked before initialisation"),
        }
    }
}

impl From<FatalError> for Error {
    fn from(e: FatalError) -> Self {
        Self::Fatal(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
