//! ARISE custom instruction record
//!
//! `InstructionField` is the decoded form of one `arise32.slli_or` word:
//!
//! ```text
//! [opcode:9][rd:5][rs1:5][rs2:5][imm:8][reserved:16]
//! ```
//!
//! Operands are validated when the record is built, so every
//! `InstructionField` encodes without error.

use crate::encoding::{IMM_SHIFT, RD_SHIFT, RS1_SHIFT, RS2_SHIFT};
use crate::error::Result;
use crate::format::{InstructionFormat, SLLI_OR};
use crate::opcode::Opcode;
use crate::register::{Register, RegisterNaming};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decoded custom instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstructionField {
    opcode: Opcode,
    rd: Register,
    rs1: Register,
    rs2: Register,
    imm: i8,
}

impl InstructionField {
    /// Build from raw operand values, rejecting any that do not fit
    pub fn new(rd: u32, rs1: u32, rs2: u32, imm: i32) -> Result<Self> {
        let word = SLLI_OR.encode_operands(&[rd as i64, rs1 as i64, rs2 as i64, imm as i64])?;
        Self::decode(word)
    }

    /// Build from already-typed operands
    pub const fn from_parts(rd: Register, rs1: Register, rs2: Register, imm: i8) -> Self {
        Self {
            opcode: Opcode::SlliOr,
            rd,
            rs1,
            rs2,
            imm,
        }
    }

    /// Decode a 48-bit word
    pub fn decode(word: u64) -> Result<Self> {
        let operands = SLLI_OR.decode_operands(word)?;
        // Field widths were checked by the format, so every lookup succeeds
        let reg = |value: i64| Register::ALL[value as usize];
        Ok(Self::from_parts(
            reg(operands[0]),
            reg(operands[1]),
            reg(operands[2]),
            operands[3] as i8,
        ))
    }

    /// Encode to a 48-bit word
    ///
    /// Operands were range-checked on construction, so this cannot fail.
    pub fn encode(&self) -> u64 {
        let imm_bits = (self.imm as u8) as u64;
        (self.opcode.to_u16() as u64)
            | ((self.rd.index() as u64) << RD_SHIFT)
            | ((self.rs1.index() as u64) << RS1_SHIFT)
            | ((self.rs2.index() as u64) << RS2_SHIFT)
            | (imm_bits << IMM_SHIFT)
    }

    /// The format this record belongs to
    pub fn format(&self) -> &'static InstructionFormat {
        &SLLI_OR
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn rd(&self) -> Register {
        self.rd
    }

    pub fn rs1(&self) -> Register {
        self.rs1
    }

    pub fn rs2(&self) -> Register {
        self.rs2
    }

    pub fn imm(&self) -> i8 {
        self.imm
    }

    /// Check if executing this instruction cannot change any register
    pub fn is_nop(&self) -> bool {
        self.rd.is_zero()
    }

    /// Render as assembly with the given register naming
    pub fn to_asm(&self, naming: RegisterNaming) -> String {
        format!(
            "{} {}, {}, {}, {}",
            self.opcode.mnemonic(),
            self.rd.name(naming),
            self.rs1.name(naming),
            self.rs2.name(naming),
            self.imm
        )
    }
}

impl fmt::Display for InstructionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_asm(RegisterNaming::Numeric))
    }
}

/// Pack operands into a 48-bit word
///
/// Fails with a range error if any operand does not fit its field.
pub fn encode(rd: u32, rs1: u32, rs2: u32, imm: i32) -> Result<u64> {
    InstructionField::new(rd, rs1, rs2, imm).map(|instr| instr.encode())
}

/// Unpack a 48-bit word
///
/// Fails with a format error if the opcode bits do not match or the
/// reserved bits are set.
pub fn decode(word: u64) -> Result<InstructionField> {
    InstructionField::decode(word)
}
