//! Integration tests for the ARISE disassembler
//!
//! Listings are fed back through the assembler to check they reproduce
//! the original words.

use arise_assembler::assemble;
use arise_disassembler::{disassemble, disassemble_bytes, FormatOptions, Radix};
use arise_spec::{encode, Program, RegisterNaming};
use proptest::prelude::*;

fn all_options() -> Vec<FormatOptions> {
    let mut out = Vec::new();
    for naming in [RegisterNaming::Numeric, RegisterNaming::Abi] {
        for radix in [Radix::Decimal, Radix::Hex] {
            for show_offsets in [false, true] {
                out.push(FormatOptions {
                    naming,
                    radix,
                    show_offsets,
                });
            }
        }
    }
    out
}

// ============================================================================
// Listing Tests
// ============================================================================

#[test]
fn test_reference_listing() {
    let program = assemble("arise32.slli_or x5, x6, x7, 1").unwrap();
    let listing = disassemble(&program, &FormatOptions::default());

    let line = listing.lines().last().unwrap();
    assert!(line.starts_with("arise32.slli_or x5, x6, x7, 1"));
    assert!(line.ends_with("; 0x00000000:  000001398A2B"));
}

#[test]
fn test_abi_hex_listing() {
    let program = assemble("arise32.slli_or x10, x0, x1, -16").unwrap();
    let opts = FormatOptions {
        naming: RegisterNaming::Abi,
        radix: Radix::Hex,
        show_offsets: false,
    };
    assert_eq!(
        disassemble(&program, &opts),
        "arise32.slli_or a0, zero, ra, -0x10\n"
    );
}

#[test]
fn test_bad_words_keep_their_position() {
    let program = Program::from_words(vec![
        0x0139_8A2B,
        0x0000_0000_0000_0000,
        0x8000_0139_8A2B,
        0x0139_8A2B,
    ]);
    let opts = FormatOptions {
        show_offsets: false,
        ..FormatOptions::default()
    };
    let listing = disassemble(&program, &opts);
    let lines: Vec<&str> = listing.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with(".insn 6, 0x0 "));
    assert!(lines[1].contains("do not match"));
    assert!(lines[2].starts_with(".insn 6, 0x800001398a2b"));
    assert!(lines[2].contains("reserved"));
    assert_eq!(lines[3], "arise32.slli_or x5, x6, x7, 1");
}

#[test]
fn test_disassemble_bytes_rejects_truncated_input() {
    let mut bytes = Program::from_words(vec![0x0139_8A2B]).to_bytes().unwrap();
    bytes.pop();
    assert!(disassemble_bytes(&bytes, &FormatOptions::default()).is_err());
}

// ============================================================================
// Reassembly Tests
// ============================================================================

#[test]
fn test_listing_reassembles_under_every_option() {
    let source = r#"
        arise32.slli_or x5, x6, x7, 1
        arise32.slli_or x0, x31, x1, -128
        arise32.slli_or s11, a7, t6, 127
    "#;
    let program = assemble(source).unwrap();

    for opts in all_options() {
        let listing = disassemble(&program, &opts);
        let reassembled = assemble(&listing).unwrap();
        assert_eq!(reassembled, program, "options: {:?}", opts);
    }
}

#[test]
fn test_listing_with_bad_words_fails_reassembly() {
    // Undecodable words are emitted as `.insn`, which the assembler validates.
    let program = Program::from_words(vec![0x0139_8A2C]);
    let listing = disassemble(&program, &FormatOptions::default());
    assert!(assemble(&listing).is_err());
}

proptest! {
    #[test]
    fn prop_disassembly_roundtrip(
        fields in prop::collection::vec((0u32..32, 0u32..32, 0u32..32, -128i32..=127), 0..16),
        abi in any::<bool>(),
        hex in any::<bool>(),
        show_offsets in any::<bool>(),
    ) {
        let words = fields
            .iter()
            .map(|&(rd, rs1, rs2, imm)| encode(rd, rs1, rs2, imm).unwrap())
            .collect();
        let program = Program::from_words(words);
        let opts = FormatOptions {
            naming: if abi { RegisterNaming::Abi } else { RegisterNaming::Numeric },
            radix: if hex { Radix::Hex } else { Radix::Decimal },
            show_offsets,
        };

        let reassembled = assemble(&disassemble(&program, &opts)).unwrap();
        prop_assert_eq!(reassembled, program);
    }
}
