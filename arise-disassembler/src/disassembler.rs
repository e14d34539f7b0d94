//! Main disassembler logic

use arise_spec::{InstructionField, Program, INSTRUCTION_BYTES};
use tracing::warn;

use crate::error::Result;
use crate::formatter::{format, format_raw_word, FormatOptions};

/// Column at which per-line annotations start
const ANNOTATION_COLUMN: usize = 40;

/// Disassemble a program into assembly text
///
/// Words that fail to decode are written as `.insn` directives followed by
/// the decode error in a comment, so the listing keeps one line per word.
pub fn disassemble(program: &Program, opts: &FormatOptions) -> String {
    let mut output = String::new();

    if opts.show_offsets {
        output.push_str("; ARISE disassembly\n");
        output.push_str(&format!(
            "; Code size: {} bytes ({} instructions)\n\n",
            program.byte_len(),
            program.len()
        ));
    }

    for (index, &word) in program.code.iter().enumerate() {
        let offset = index * INSTRUCTION_BYTES;
        let (body, error) = match InstructionField::decode(word) {
            Ok(instr) => (format(&instr, opts), None),
            Err(e) => {
                warn!(offset, word, error = %e, "undecodable word");
                (format_raw_word(word), Some(e.to_string()))
            }
        };

        let mut notes = Vec::new();
        if opts.show_offsets {
            notes.push(format!("0x{:08X}:  {:012X}", offset, word));
        }
        if let Some(error) = error {
            notes.push(error);
        }

        if notes.is_empty() {
            output.push_str(&body);
        } else {
            output.push_str(&format!(
                "{:<width$}; {}",
                body,
                notes.join("  "),
                width = ANNOTATION_COLUMN
            ));
        }
        output.push('\n');
    }

    output
}

/// Disassemble a program given in its byte form
pub fn disassemble_bytes(bytes: &[u8], opts: &FormatOptions) -> Result<String> {
    let program = Program::from_bytes(bytes)?;
    Ok(disassemble(&program, opts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DisassemblerError;

    fn plain() -> FormatOptions {
        FormatOptions {
            show_offsets: false,
            ..FormatOptions::default()
        }
    }

    #[test]
    fn test_disassemble_simple() {
        let program = Program::from_words(vec![0x0139_8A2B]);
        let asm = disassemble(&program, &plain());
        assert_eq!(asm, "arise32.slli_or x5, x6, x7, 1\n");
    }

    #[test]
    fn test_disassemble_with_offsets() {
        let program = Program::from_words(vec![0x0139_8A2B, 0x0139_8A2B]);
        let asm = disassemble(&program, &FormatOptions::default());

        assert!(asm.starts_with("; ARISE disassembly\n"));
        assert!(asm.contains("12 bytes (2 instructions)"));
        assert!(asm.contains("; 0x00000000:  000001398A2B"));
        assert!(asm.contains("; 0x00000006:  000001398A2B"));
    }

    #[test]
    fn test_undecodable_word() {
        let program = Program::from_words(vec![0x0139_8A2C]);
        let asm = disassemble(&program, &plain());
        assert!(asm.starts_with(".insn 6, 0x1398a2c"));
        assert!(asm.contains("; Invalid instruction word"));
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(disassemble(&Program::new(), &plain()), "");
    }

    #[test]
    fn test_disassemble_bytes() {
        let asm = disassemble_bytes(&[0x2B, 0x8A, 0x39, 0x01, 0x00, 0x00], &plain()).unwrap();
        assert_eq!(asm.trim_end(), "arise32.slli_or x5, x6, x7, 1");

        let err = disassemble_bytes(&[0x2B], &plain()).unwrap_err();
        assert!(matches!(err, DisassemblerError::Spec(_)));
    }
}
