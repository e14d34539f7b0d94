//! Machine state for ARISE

use arise_spec::{Register, NUM_REGISTERS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer register file (x0-x31, signed 32-bit)
///
/// `x0` always reads as zero and writes to it are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MachineState {
    registers: [i32; NUM_REGISTERS],
}

impl MachineState {
    /// All registers zero
    pub fn new() -> Self {
        Self {
            registers: [0; NUM_REGISTERS],
        }
    }

    /// Build from a full register image; slot 0 is ignored
    pub fn from_registers(mut registers: [i32; NUM_REGISTERS]) -> Self {
        registers[Register::ZERO.index()] = 0;
        Self { registers }
    }

    /// Read register (x0 always returns 0)
    #[inline]
    pub fn read(&self, reg: Register) -> i32 {
        if reg.is_zero() {
            0
        } else {
            self.registers[reg.index()]
        }
    }

    /// Write register (writes to x0 are ignored)
    #[inline]
    pub fn write(&mut self, reg: Register, value: i32) {
        if !reg.is_zero() {
            self.registers[reg.index()] = value;
        }
    }

    /// Builder-style write, for setting up inputs
    pub fn with(mut self, reg: Register, value: i32) -> Self {
        self.write(reg, value);
        self
    }

    pub fn registers(&self) -> &[i32; NUM_REGISTERS] {
        &self.registers
    }

    /// Registers holding a non-zero value, in index order
    pub fn non_zero(&self) -> impl Iterator<Item = (Register, i32)> + '_ {
        Register::ALL
            .iter()
            .map(move |&reg| (reg, self.read(reg)))
            .filter(|&(_, value)| value != 0)
    }

    /// Zero every register
    pub fn reset(&mut self) {
        self.registers = [0; NUM_REGISTERS];
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in Register::ALL.chunks(4) {
            let line: Vec<String> = row
                .iter()
                .map(|&reg| format!("{:>4}={:#010x}", reg.to_string(), self.read(reg) as u32))
                .collect();
            writeln!(f, "{}", line.join("  "))?;
        }
        Ok(())
    }
}
