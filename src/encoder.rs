//! One-bit-per-press ASCII encoder.
//!
//! Two pieces of state, both owned by the FSM context:
//!
//! * [`BitAccumulator`]: an 8-bit shift register plus a bit count.  Bits
//!   enter at the LSB and shift left, so the first bit pressed ends up as
//!   the MSB of the saved byte.
//! * [`CharacterBuffer`]: fixed-capacity, append-only string of saved
//!   bytes.  Only an explicit [`CharacterBuffer::clear`] shrinks it.
//!
//! Neither touches hardware.  They report what happened through the
//! outcome enums and the state handlers decide what the LEDs should show.

use core::fmt;

use heapless::Vec;

/// Bits per saved character.
pub const BITS_PER_CHAR: u8 = 8;

/// Maximum number of saved characters.
pub const BUFFER_CAPACITY: usize = 32;

/// Result of [`BitAccumulator::insert_bit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The bit was shifted in; `count` bits are now held.
    Inserted { bit: u8, count: u8 },
    /// Eight bits are already held; the register was left unchanged.
    Full,
}

/// Result of [`BitAccumulator::save_if_complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The byte was appended; the buffer now holds `len` characters.
    Saved { byte: u8, len: usize },
    /// The byte was complete but the buffer is full.  Accumulator still cleared.
    Dropped { byte: u8 },
    /// Fewer than eight bits held; nothing changed.
    Incomplete { count: u8 },
}

// ---------------------------------------------------------------------------
// Bit accumulator
// ---------------------------------------------------------------------------

/// Saturating 8-bit shift register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitAccumulator {
    value: u8,
    count: u8,
}

impl BitAccumulator {
    pub const fn new() -> Self {
        Self { value: 0, count: 0 }
    }

    /// Shift `bit` (only its LSB is used) into the register.
    pub fn insert_bit(&mut self, bit: u8) -> InsertOutcome {
        if self.is_full() {
            return InsertOutcome::Full;
        }
        let bit = bit & 0x01;
        self.value = (self.value << 1) | bit;
        self.count += 1;
        InsertOutcome::Inserted {
            bit,
            count: self.count,
        }
    }

    pub fn clear(&mut self) {
        self.value = 0;
        self.count = 0;
    }

    /// Append the held byte to `buffer` if all eight bits are present.
    pub fn save_if_complete(&mut self, buffer: &mut CharacterBuffer) -> SaveOutcome {
        if self.count != BITS_PER_CHAR {
            return SaveOutcome::Incomplete { count: self.count };
        }
        let byte = self.value;
        self.clear();
        if buffer.push(byte) {
            SaveOutcome::Saved {
                byte,
                len: buffer.len(),
            }
        } else {
            SaveOutcome::Dropped { byte }
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn is_full(&self) -> bool {
        self.count == BITS_PER_CHAR
    }
}

// ---------------------------------------------------------------------------
// Character buffer
// ---------------------------------------------------------------------------

/// Bounded string of saved characters.
///
/// Stored as raw bytes because any 8-bit pattern can be entered, including
/// values that are not valid single-byte UTF-8.  `Display` escapes those.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterBuffer {
    bytes: Vec<u8, BUFFER_CAPACITY>,
}

impl CharacterBuffer {
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Append one character.  Returns `false` (buffer unchanged) when full.
    pub fn push(&mut self, byte: u8) -> bool {
        self.bytes.push(byte).is_ok()
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Most recently saved character, if any.
    pub fn last(&self) -> Option<u8> {
        self.bytes.last().copied()
    }
}

impl fmt::Display for CharacterBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bytes {
            write!(f, "{}", core::ascii::escape_default(b))?;
        }
        Ok(())
    }
}
