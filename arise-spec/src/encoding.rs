//! # Instruction Encoding Constants and Bit Fields
//!
//! Centralized field layout for 48-bit ARISE custom instructions.
//!
//! ## Instruction Format (48-bit, low to high)
//!
//! ```text
//! [opcode:9][rd:5][rs1:5][rs2:5][imm:8][reserved:16]
//! ```
//!
//! The reserved bits are zero in every valid word.

use crate::error::{AriseError, Result};

// ============================================================================
// Word Geometry
// ============================================================================

/// Total instruction width in bits
pub const INSTRUCTION_BITS: u32 = 48;

/// Bytes per instruction word in the program byte form
pub const INSTRUCTION_BYTES: usize = 6;

/// Mask covering a whole 48-bit word
pub const WORD_MASK: u64 = (1 << INSTRUCTION_BITS) - 1;

// ============================================================================
// Bit Position Constants
// ============================================================================

/// Opcode field: bits 0-8 (9 bits)
pub const OPCODE_SHIFT: u32 = 0;

/// Destination register field: bits 9-13 (5 bits)
pub const RD_SHIFT: u32 = 9;

/// Source register 1 field: bits 14-18 (5 bits)
pub const RS1_SHIFT: u32 = 14;

/// Source register 2 field: bits 19-23 (5 bits)
pub const RS2_SHIFT: u32 = 19;

/// Immediate field: bits 24-31 (8 bits, two's complement)
pub const IMM_SHIFT: u32 = 24;

/// Reserved padding: bits 32-47 (16 bits)
pub const RESERVED_SHIFT: u32 = 32;

// ============================================================================
// Field Masks
// ============================================================================

/// Opcode mask (9 bits)
pub const OPCODE_MASK: u64 = 0x1FF;

/// Register field mask (5 bits)
pub const REGISTER_MASK: u64 = 0x1F;

/// Immediate field mask (8 bits)
pub const IMM_MASK: u64 = 0xFF;

/// Reserved field mask (16 bits)
pub const RESERVED_MASK: u64 = 0xFFFF;

/// Shift amounts are taken modulo the 32-bit register width
pub const SHAMT_MASK: u32 = 0x1F;

// ============================================================================
// Bit Fields
// ============================================================================

/// How a field's raw bits are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
    Unsigned,
    /// Two's complement, sign-extended on extraction
    Signed,
}

/// A named, contiguous range of bits inside an instruction word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitField {
    pub name: &'static str,
    /// Position of the least significant bit
    pub lsb: u32,
    /// Width in bits
    pub width: u32,
    pub signedness: Signedness,
}

impl BitField {
    pub const fn unsigned(name: &'static str, lsb: u32, width: u32) -> Self {
        Self {
            name,
            lsb,
            width,
            signedness: Signedness::Unsigned,
        }
    }

    pub const fn signed(name: &'static str, lsb: u32, width: u32) -> Self {
        Self {
            name,
            lsb,
            width,
            signedness: Signedness::Signed,
        }
    }

    /// Mask of `width` low bits (not shifted into position)
    #[inline]
    pub const fn mask(&self) -> u64 {
        (1u64 << self.width) - 1
    }

    /// Position of the most significant bit
    #[inline]
    pub const fn msb(&self) -> u32 {
        self.lsb + self.width - 1
    }

    /// Smallest representable value
    pub const fn min(&self) -> i64 {
        match self.signedness {
            Signedness::Unsigned => 0,
            Signedness::Signed => -(1i64 << (self.width - 1)),
        }
    }

    /// Largest representable value
    pub const fn max(&self) -> i64 {
        match self.signedness {
            Signedness::Unsigned => self.mask() as i64,
            Signedness::Signed => (1i64 << (self.width - 1)) - 1,
        }
    }

    /// Check that `value` fits without truncation
    pub fn check(&self, value: i64) -> Result<()> {
        if value < self.min() || value > self.max() {
            return Err(AriseError::Range {
                field: self.name,
                value,
                min: self.min(),
                max: self.max(),
            });
        }
        Ok(())
    }

    /// Place `value` into this field of `word`
    ///
    /// The field's bits in `word` are expected to be clear.
    pub fn insert(&self, word: u64, value: i64) -> Result<u64> {
        self.check(value)?;
        Ok(word | (((value as u64) & self.mask()) << self.lsb))
    }

    /// Raw field bits, zero-extended
    #[inline]
    pub const fn extract_raw(&self, word: u64) -> u64 {
        (word >> self.lsb) & self.mask()
    }

    /// Field value, sign-extended for signed fields
    pub const fn extract(&self, word: u64) -> i64 {
        let raw = self.extract_raw(word);
        match self.signedness {
            Signedness::Signed if raw & (1 << (self.width - 1)) != 0 => {
                raw as i64 - (1i64 << self.width)
            }
            _ => raw as i64,
        }
    }
}

/// Opcode field
pub const OPCODE_FIELD: BitField = BitField::unsigned("opcode", OPCODE_SHIFT, 9);

/// Destination register field
pub const RD_FIELD: BitField = BitField::unsigned("rd", RD_SHIFT, 5);

/// Source register 1 field
pub const RS1_FIELD: BitField = BitField::unsigned("rs1", RS1_SHIFT, 5);

/// Source register 2 field
pub const RS2_FIELD: BitField = BitField::unsigned("rs2", RS2_SHIFT, 5);

/// Signed shift immediate field
pub const IMM_FIELD: BitField = BitField::signed("imm", IMM_SHIFT, 8);
