//! # Instruction Format Schema
//!
//! Each custom instruction is described by a static [`InstructionFormat`]
//! value: its opcode, operand fields, and behaviour. The codec reads field
//! positions and widths from this table, and the same table renders the
//! human-readable description block:
//!
//! ```text
//! SLLI_OR {
//!     encoding: 16'b0000000000000000 :: imm[7:0] :: rs2[4:0] :: rs1[4:0] :: rd[4:0] :: 9'b000101011;
//!     assembly: {"arise32.slli_or", "{name(rd)}, {name(rs1)}, {name(rs2)}, {imm}"};
//!     behavior: {
//!       if ((rd) != 0) X[rd] = (X[rs1] | (X[rs2] << (signed)imm));
//!     }
//! }
//! ```

use crate::encoding::{
    BitField, IMM_FIELD, INSTRUCTION_BITS, OPCODE_FIELD, RD_FIELD, RS1_FIELD, RS2_FIELD,
    WORD_MASK,
};
use crate::error::{AriseError, FormatReason, Result};
use crate::opcode::Opcode;

/// An assembly operand and the bit field it is encoded into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Register(BitField),
    Immediate(BitField),
}

impl Operand {
    pub const fn field(&self) -> BitField {
        match self {
            Operand::Register(field) | Operand::Immediate(field) => *field,
        }
    }
}

/// Static description of one custom instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionFormat {
    pub opcode: Opcode,
    /// Total encoded width in bits
    pub width: u32,
    /// Operands in assembly order
    pub operands: &'static [Operand],
    /// Reference semantics, in the description language
    pub behavior: &'static str,
}

/// `arise32.slli_or rd, rs1, rs2, imm`
pub const SLLI_OR: InstructionFormat = InstructionFormat {
    opcode: Opcode::SlliOr,
    width: INSTRUCTION_BITS,
    operands: &[
        Operand::Register(RD_FIELD),
        Operand::Register(RS1_FIELD),
        Operand::Register(RS2_FIELD),
        Operand::Immediate(IMM_FIELD),
    ],
    behavior: "if ((rd) != 0) X[rd] = (X[rs1] | (X[rs2] << (signed)imm));",
};

/// Every format known to the codec
pub const FORMATS: &[InstructionFormat] = &[SLLI_OR];

/// Look up a format by assembly mnemonic (case-insensitive)
pub fn lookup_mnemonic(mnemonic: &str) -> Option<&'static InstructionFormat> {
    FORMATS
        .iter()
        .find(|format| format.opcode.mnemonic().eq_ignore_ascii_case(mnemonic))
}

impl InstructionFormat {
    /// Field by name, including `opcode`
    pub fn field(&self, name: &str) -> Option<BitField> {
        if name == OPCODE_FIELD.name {
            return Some(OPCODE_FIELD);
        }
        self.operands
            .iter()
            .map(Operand::field)
            .find(|field| field.name == name)
    }

    /// Bits covered by the opcode and operand fields
    pub fn used_bits(&self) -> u32 {
        OPCODE_FIELD.width + self.operands.iter().map(|op| op.field().width).sum::<u32>()
    }

    /// Zero padding above the highest operand field
    pub fn padding_bits(&self) -> u32 {
        self.width - self.used_bits()
    }

    /// Pack operand values (in assembly order) into a word
    pub fn encode_operands(&self, values: &[i64]) -> Result<u64> {
        debug_assert_eq!(values.len(), self.operands.len());

        let mut word = self.opcode.to_u16() as u64;
        for (operand, &value) in self.operands.iter().zip(values) {
            word = operand.field().insert(word, value)?;
        }
        Ok(word)
    }

    /// Validate a word against this format and unpack its operands
    pub fn decode_operands(&self, word: u64) -> Result<Vec<i64>> {
        if word & !WORD_MASK != 0 {
            return Err(AriseError::Format {
                word,
                reason: FormatReason::TooWide,
            });
        }

        let found = OPCODE_FIELD.extract_raw(word) as u16;
        if found != self.opcode.to_u16() {
            return Err(AriseError::Format {
                word,
                reason: FormatReason::OpcodeMismatch {
                    expected: self.opcode.to_u16(),
                    found,
                },
            });
        }

        if word >> self.used_bits() != 0 {
            return Err(AriseError::Format {
                word,
                reason: FormatReason::ReservedBitsSet,
            });
        }

        Ok(self
            .operands
            .iter()
            .map(|operand| operand.field().extract(word))
            .collect())
    }

    /// Encoding line, most significant field first
    pub fn encoding_line(&self) -> String {
        let mut fields: Vec<BitField> = self.operands.iter().map(Operand::field).collect();
        fields.sort_by(|a, b| b.lsb.cmp(&a.lsb));

        let mut parts = Vec::with_capacity(fields.len() + 2);
        let padding = self.padding_bits();
        if padding > 0 {
            parts.push(format!("{}'b{}", padding, "0".repeat(padding as usize)));
        }
        for field in fields {
            parts.push(format!("{}[{}:0]", field.name, field.width - 1));
        }
        parts.push(self.opcode.bit_literal());

        parts.join(" :: ")
    }

    /// Operand template, e.g. `{name(rd)}, {name(rs1)}, {name(rs2)}, {imm}`
    pub fn assembly_template(&self) -> String {
        self.operands
            .iter()
            .map(|operand| match operand {
                Operand::Register(field) => format!("{{name({})}}", field.name),
                Operand::Immediate(field) => format!("{{{}}}", field.name),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Full description block
    pub fn description(&self) -> String {
        format!(
            "{} {{\n    encoding: {};\n    assembly: {{\"{}\", \"{}\"}};\n    behavior: {{\n      {}\n    }}\n}}\n",
            self.opcode.name(),
            self.encoding_line(),
            self.opcode.mnemonic(),
            self.assembly_template(),
            self.behavior,
        )
    }
}
