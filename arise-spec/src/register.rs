//! Register definitions for ARISE (RISC-V integer register file)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of registers
pub const NUM_REGISTERS: usize = 32;

/// Register (x0-x31)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Register {
    X0 = 0,   // zero - hardwired to 0
    X1 = 1,   // ra   - return address
    X2 = 2,   // sp   - stack pointer
    X3 = 3,   // gp   - global pointer
    X4 = 4,   // tp   - thread pointer
    X5 = 5,   // t0   - temporary (caller-saved)
    X6 = 6,   // t1
    X7 = 7,   // t2
    X8 = 8,   // s0/fp - frame pointer (callee-saved)
    X9 = 9,   // s1
    X10 = 10, // a0   - argument 0 / return value
    X11 = 11, // a1
    X12 = 12, // a2
    X13 = 13, // a3
    X14 = 14, // a4
    X15 = 15, // a5
    X16 = 16, // a6
    X17 = 17, // a7
    X18 = 18, // s2   - saved register (callee-saved)
    X19 = 19, // s3
    X20 = 20, // s4
    X21 = 21, // s5
    X22 = 22, // s6
    X23 = 23, // s7
    X24 = 24, // s8
    X25 = 25, // s9
    X26 = 26, // s10
    X27 = 27, // s11
    X28 = 28, // t3   - temporary (caller-saved)
    X29 = 29, // t4
    X30 = 30, // t5
    X31 = 31, // t6
}

/// How register operands are spelled in assembly text
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RegisterNaming {
    /// `x0`..`x31`
    #[default]
    Numeric,
    /// `zero`, `ra`, `sp`, ... `t6`
    Abi,
}

const ABI_NAMES: [&str; NUM_REGISTERS] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

impl Register {
    pub const ZERO: Self = Self::X0;
    pub const RA: Self = Self::X1;
    pub const SP: Self = Self::X2;
    pub const FP: Self = Self::X8;
    pub const T0: Self = Self::X5;
    pub const T1: Self = Self::X6;
    pub const T2: Self = Self::X7;
    pub const A0: Self = Self::X10;
    pub const A1: Self = Self::X11;

    /// All registers in index order
    pub const ALL: [Self; NUM_REGISTERS] = [
        Self::X0, Self::X1, Self::X2, Self::X3, Self::X4, Self::X5, Self::X6, Self::X7,
        Self::X8, Self::X9, Self::X10, Self::X11, Self::X12, Self::X13, Self::X14, Self::X15,
        Self::X16, Self::X17, Self::X18, Self::X19, Self::X20, Self::X21, Self::X22, Self::X23,
        Self::X24, Self::X25, Self::X26, Self::X27, Self::X28, Self::X29, Self::X30, Self::X31,
    ];

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// ABI name (`t0`, `a0`, ...)
    pub fn abi_name(self) -> &'static str {
        ABI_NAMES[self.index()]
    }

    /// Render with the requested naming convention
    pub fn name(self, naming: RegisterNaming) -> String {
        match naming {
            RegisterNaming::Numeric => format!("x{}", self.index()),
            RegisterNaming::Abi => self.abi_name().to_string(),
        }
    }

    /// Parse a register from `xN`, an ABI name, or `fp`. Case-insensitive.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();

        if let Some(digits) = name.strip_prefix('x') {
            // Reject "x05" and friends so every register has one spelling
            if digits.is_empty() || (digits.len() > 1 && digits.starts_with('0')) {
                return None;
            }
            return digits.parse::<usize>().ok().and_then(Self::from_index);
        }

        if name == "fp" {
            return Some(Self::FP);
        }

        ABI_NAMES
            .iter()
            .position(|abi| *abi == name)
            .and_then(Self::from_index)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.index())
    }
}
