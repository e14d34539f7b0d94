//! Encoding layout and round-trip tests for the SLLI_OR codec

use arise_spec::encoding::*;
use arise_spec::{decode, encode, AriseError, FormatReason, InstructionField, Register};
use proptest::prelude::*;

// ============================================================================
// Layout Constants
// ============================================================================

#[test]
fn test_encoding_constants() {
    assert_eq!(OPCODE_SHIFT, 0);
    assert_eq!(RD_SHIFT, 9);
    assert_eq!(RS1_SHIFT, 14);
    assert_eq!(RS2_SHIFT, 19);
    assert_eq!(IMM_SHIFT, 24);
    assert_eq!(RESERVED_SHIFT, 32);

    assert_eq!(OPCODE_MASK, 0x1FF);
    assert_eq!(REGISTER_MASK, 0x1F);
    assert_eq!(IMM_MASK, 0xFF);
    assert_eq!(WORD_MASK, 0xFFFF_FFFF_FFFF);
}

#[test]
fn test_field_bit_widths() {
    assert_eq!(OPCODE_MASK.count_ones(), 9);
    assert_eq!(REGISTER_MASK.count_ones(), 5);
    assert_eq!(IMM_MASK.count_ones(), 8);
    assert_eq!(RESERVED_MASK.count_ones(), 16);
    assert_eq!(INSTRUCTION_BITS as usize, INSTRUCTION_BYTES * 8);
}

// ============================================================================
// Reference Words
// ============================================================================

#[test]
fn test_reference_example() {
    let word = encode(5, 6, 7, 1).unwrap();
    let instr = decode(word).unwrap();
    assert_eq!(
        (instr.rd(), instr.rs1(), instr.rs2(), instr.imm()),
        (Register::X5, Register::X6, Register::X7, 1)
    );
}

#[test]
fn test_negative_immediate_bits() {
    // -1 occupies all eight immediate bits and nothing above
    let word = encode(0, 0, 0, -1).unwrap();
    assert_eq!(word, 0xFF00_002B);
    assert_eq!(decode(word).unwrap().imm(), -1);
}

#[test]
fn test_all_registers_roundtrip() {
    for rd in 0..32 {
        for rs1 in 0..32 {
            let word = encode(rd, rs1, 31 - rs1, 0).unwrap();
            let instr = decode(word).unwrap();
            assert_eq!(instr.rd().index() as u32, rd);
            assert_eq!(instr.rs1().index() as u32, rs1);
            assert_eq!(instr.rs2().index() as u32, 31 - rs1);
        }
    }
}

// ============================================================================
// Boundaries
// ============================================================================

#[test]
fn test_imm_boundaries() {
    assert_eq!(decode(encode(1, 1, 1, 127).unwrap()).unwrap().imm(), 127);
    assert_eq!(decode(encode(1, 1, 1, -128).unwrap()).unwrap().imm(), -128);

    match encode(1, 1, 1, 128) {
        Err(AriseError::Range { field, value, .. }) => {
            assert_eq!(field, "imm");
            assert_eq!(value, 128);
        }
        other => panic!("Expected range error, got {:?}", other),
    }
}

#[test]
fn test_every_foreign_opcode_is_rejected() {
    for opcode in 0u64..512 {
        let word = (5 << RD_SHIFT) | opcode;
        let result = decode(word);
        if opcode == 0x2B {
            assert!(result.is_ok());
        } else {
            assert_eq!(
                result.unwrap_err(),
                AriseError::Format {
                    word,
                    reason: FormatReason::OpcodeMismatch {
                        expected: 0x2B,
                        found: opcode as u16,
                    },
                }
            );
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_roundtrip(rd in 0u32..32, rs1 in 0u32..32, rs2 in 0u32..32, imm in -128i32..=127) {
        let word = encode(rd, rs1, rs2, imm).unwrap();
        let instr = decode(word).unwrap();
        prop_assert_eq!(instr.rd().index() as u32, rd);
        prop_assert_eq!(instr.rs1().index() as u32, rs1);
        prop_assert_eq!(instr.rs2().index() as u32, rs2);
        prop_assert_eq!(instr.imm() as i32, imm);
        prop_assert_eq!(word >> RESERVED_SHIFT, 0);
    }

    #[test]
    fn prop_out_of_range_imm_rejected(imm in prop_oneof![i32::MIN..-128, 128..i32::MAX]) {
        prop_assert!(encode(0, 0, 0, imm).unwrap_err().is_range_error());
    }

    #[test]
    fn prop_decode_reencodes_exactly(word in 0u64..(1 << 32)) {
        if let Ok(instr) = decode(word) {
            prop_assert_eq!(instr.encode(), word);
        }
    }

    #[test]
    fn prop_from_parts_is_valid(rd in 0usize..32, rs1 in 0usize..32, rs2 in 0usize..32, imm in any::<i8>()) {
        let instr = InstructionField::from_parts(
            Register::from_index(rd).unwrap(),
            Register::from_index(rs1).unwrap(),
            Register::from_index(rs2).unwrap(),
            imm,
        );
        prop_assert_eq!(decode(instr.encode()).unwrap(), instr);
    }
}
