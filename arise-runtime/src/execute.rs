//! Instruction evaluation for ARISE

use crate::state::MachineState;
use arise_spec::{InstructionField, SHAMT_MASK};
use tracing::trace;

/// `x | (y << imm)` with the shift amount taken modulo 32
#[inline]
pub fn slli_or(x: i32, y: i32, imm: i8) -> i32 {
    let shamt = (imm as i32 as u32) & SHAMT_MASK;
    x | y.wrapping_shl(shamt)
}

/// Apply one instruction to the register file
///
/// Returns the value written to `rd`, or `None` when `rd` is `x0`.
pub fn evaluate(instr: &InstructionField, state: &mut MachineState) -> Option<i32> {
    if instr.rd().is_zero() {
        return None;
    }

    let result = slli_or(state.read(instr.rs1()), state.read(instr.rs2()), instr.imm());
    state.write(instr.rd(), result);
    trace!(rd = %instr.rd(), value = result, "register write");

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arise_spec::Register;

    fn slli_or_2(x: i32, y: i32) -> i32 {
        x | (y << 1)
    }

    #[test]
    fn test_reference_example() {
        let mut state = MachineState::new()
            .with(Register::X6, 0xAA)
            .with(Register::X7, 0x55);
        let instr = InstructionField::new(5, 6, 7, 1).unwrap();

        assert_eq!(evaluate(&instr, &mut state), Some(0xAA));
        assert_eq!(state.read(Register::X5), 0xAA);
        assert_eq!(slli_or_2(0xAA, 0x55), 0xAA);
    }

    #[test]
    fn test_shifted_bits_fill_gaps() {
        // 0xAA | (0x2A << 1) = 0xAA | 0x54
        let mut state = MachineState::new()
            .with(Register::X6, 0xAA)
            .with(Register::X7, 0x2A);
        let instr = InstructionField::new(5, 6, 7, 1).unwrap();

        assert_eq!(evaluate(&instr, &mut state), Some(0xFE));
        assert_eq!(slli_or_2(0xAA, 0x2A), 0xFE);
    }

    #[test]
    fn test_rd_zero_is_noop() {
        let before = MachineState::new()
            .with(Register::X6, 0xAA)
            .with(Register::X7, 0x55);
        let mut state = before;
        let instr = InstructionField::new(0, 6, 7, 1).unwrap();

        assert_eq!(evaluate(&instr, &mut state), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_shift_amount_masked() {
        // -1 & 31 == 31
        assert_eq!(slli_or(0, 1, -1), i32::MIN);
        // -128 & 31 == 0
        assert_eq!(slli_or(0, 3, -128), 3);
        // 33 & 31 == 1
        assert_eq!(slli_or(0, 3, 33), 6);
        // 127 & 31 == 31
        assert_eq!(slli_or(0, 1, 127), i32::MIN);
    }

    #[test]
    fn test_shift_wraps() {
        assert_eq!(slli_or(0, -1, 4), -16);
        assert_eq!(slli_or(0, 0x4000_0000, 1), i32::MIN);
        assert_eq!(slli_or(0, i32::MIN, 1), 0);
    }

    #[test]
    fn test_same_register_operands() {
        let mut state = MachineState::new().with(Register::A0, 0b0101);
        let instr = InstructionField::new(10, 10, 10, 1).unwrap();
        evaluate(&instr, &mut state);
        assert_eq!(state.read(Register::A0), 0b1111);
    }

    #[test]
    fn test_x0_source_reads_zero() {
        let mut state = MachineState::new().with(Register::X7, 1);
        let instr = InstructionField::new(5, 0, 7, 3).unwrap();
        evaluate(&instr, &mut state);
        assert_eq!(state.read(Register::X5), 8);
    }
}
