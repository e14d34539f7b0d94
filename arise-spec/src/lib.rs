//! # ARISE Custom Instruction Specification
//!
//! 48-bit custom instruction words for an extended RISC-V integer core.
//!
//! ## Key Features
//! - `arise32.slli_or rd, rs1, rs2, imm`: `X[rd] = X[rs1] | (X[rs2] << imm)`
//! - 9-bit custom opcode, 5-bit register fields, 8-bit signed immediate
//! - 32 integer registers with RISC-V ABI names, `x0` hardwired to zero
//! - Instruction formats described by a static schema ([`format::SLLI_OR`])
//!   that drives both the codec and the rendered description block
//!
//! ## Example
//!
//! ```rust
//! use arise_spec::{decode, encode};
//!
//! let word = encode(5, 6, 7, 1).unwrap();
//! assert_eq!(word, 0x0139_8A2B);
//! assert_eq!(decode(word).unwrap().to_string(), "arise32.slli_or x5, x6, x7, 1");
//! ```

pub mod encoding;
pub mod error;
pub mod format;
pub mod instruction;
pub mod opcode;
pub mod program;
pub mod register;

pub use encoding::{BitField, Signedness, INSTRUCTION_BITS, INSTRUCTION_BYTES, SHAMT_MASK};
pub use error::{AriseError, FormatReason, Result};
pub use format::{InstructionFormat, Operand, SLLI_OR};
pub use instruction::{decode, encode, InstructionField};
pub use opcode::Opcode;
pub use program::Program;
pub use register::{Register, RegisterNaming, NUM_REGISTERS};
