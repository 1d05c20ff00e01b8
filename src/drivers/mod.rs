//! Button and LED drivers over `embedded-hal` traits.

pub mod button;
pub mod led;
