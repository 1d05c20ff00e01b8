//! Logical button and LED identities.
//!
//! These carry no state.  The board mapping from logical identity to GPIO
//! lives in [`crate::pins`]; the engine only ever speaks in these terms.

/// One of the four front-panel buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
    /// Button A: shift a `0` into the accumulator.
    Zero = 0,
    /// Button B: shift a `1` into the accumulator.
    One = 1,
    /// Button C: clear the accumulator (and the string, after the first character).
    Clear = 2,
    /// Button D: save the accumulated byte to the string.
    Save = 3,
}

impl Button {
    pub const COUNT: usize = 4;

    /// Every button, in sampling order.
    pub const ALL: [Self; Self::COUNT] = [Self::Zero, Self::One, Self::Clear, Self::Save];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One of the four LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Led {
    /// LED0: lit when the last inserted bit was `0`.
    BitZero = 0,
    /// LED1: lit when the last inserted bit was `1`.
    BitOne = 1,
    /// LED2: per-state blink indicator.
    Heartbeat = 2,
    /// LED3: only driven by the breathing pattern.
    Aux = 3,
}

impl Led {
    pub const COUNT: usize = 4;

    pub const ALL: [Self; Self::COUNT] = [Self::BitZero, Self::BitOne, Self::Heartbeat, Self::Aux];

    pub const fn index(self) -> usize {
        self as usize
    }
}
