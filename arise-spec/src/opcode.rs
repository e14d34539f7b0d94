//! # ARISE Opcode Definitions
//!
//! Custom opcodes occupy the low 9 bits of a 48-bit instruction word.
//! Only the `SLLI_OR` class is defined.

use serde::{Deserialize, Serialize};

/// Width of the opcode field in bits
pub const OPCODE_BITS: u32 = 9;

/// Custom instruction opcode (9 bits)
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// SLLI_OR: rd = rs1 | (rs2 << imm)
    SlliOr = 0b0_0010_1011,
}

impl Opcode {
    /// Convert to raw opcode value
    #[inline]
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// Convert from raw opcode value
    pub const fn from_u16(value: u16) -> Option<Self> {
        match value {
            0b0_0010_1011 => Some(Opcode::SlliOr),
            _ => None,
        }
    }

    /// Assembly mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::SlliOr => "arise32.slli_or",
        }
    }

    /// Instruction class name used in description blocks
    pub const fn name(self) -> &'static str {
        match self {
            Opcode::SlliOr => "SLLI_OR",
        }
    }

    /// Opcode as a Verilog-style binary literal, e.g. `9'b000101011`
    pub fn bit_literal(self) -> String {
        format!(
            "{}'b{:0width$b}",
            OPCODE_BITS,
            self.to_u16(),
            width = OPCODE_BITS as usize
        )
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_value() {
        assert_eq!(Opcode::SlliOr.to_u16(), 0x2B);
        assert!(Opcode::SlliOr.to_u16() < (1 << OPCODE_BITS));
    }

    #[test]
    fn test_from_u16() {
        assert_eq!(Opcode::from_u16(0x2B), Some(Opcode::SlliOr));
        assert_eq!(Opcode::from_u16(0x2C), None);
        assert_eq!(Opcode::from_u16(0x1FF), None);
    }

    #[test]
    fn test_bit_literal() {
        assert_eq!(Opcode::SlliOr.bit_literal(), "9'b000101011");
    }

    #[test]
    fn test_mnemonic() {
        assert_eq!(Opcode::SlliOr.mnemonic(), "arise32.slli_or");
        assert_eq!(Opcode::SlliOr.to_string(), "arise32.slli_or");
        assert_eq!(Opcode::SlliOr.name(), "SLLI_OR");
    }
}
