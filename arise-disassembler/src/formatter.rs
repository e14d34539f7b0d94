//! Instruction formatting to assembly text

use arise_spec::{InstructionField, RegisterNaming, INSTRUCTION_BYTES};

/// How immediates are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Radix {
    #[default]
    Decimal,
    /// Signed hex, e.g. `-0x1`, so the text reassembles to the same value
    Hex,
}

/// Listing options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub naming: RegisterNaming,
    pub radix: Radix,
    /// Prefix the listing with a header and annotate each line with its
    /// byte offset and raw word
    pub show_offsets: bool,
}

impl FormatOptions {
    pub const DEFAULT: Self = Self {
        naming: RegisterNaming::Numeric,
        radix: Radix::Decimal,
        show_offsets: true,
    };
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Format instruction as assembly text
pub fn format(instr: &InstructionField, opts: &FormatOptions) -> String {
    format!(
        "{} {}, {}, {}, {}",
        instr.opcode().mnemonic(),
        instr.rd().name(opts.naming),
        instr.rs1().name(opts.naming),
        instr.rs2().name(opts.naming),
        format_immediate(instr.imm() as i64, opts.radix),
    )
}

/// Format a signed immediate in the requested radix
pub fn format_immediate(value: i64, radix: Radix) -> String {
    match radix {
        Radix::Decimal => value.to_string(),
        Radix::Hex if value < 0 => format!("-{:#x}", value.unsigned_abs()),
        Radix::Hex => format!("{:#x}", value),
    }
}

/// Raw-word directive for a word that does not decode
pub fn format_raw_word(word: u64) -> String {
    format!(".insn {}, {:#x}", INSTRUCTION_BYTES, word)
}
