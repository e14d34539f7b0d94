//! # ARISE Runtime
//!
//! Portable simulation of ARISE custom instructions.
//!
//! The real custom opcode cannot be emitted from portable code, so this crate
//! stands in for the hardware: [`evaluate`] applies one decoded instruction to
//! a caller-owned [`MachineState`], and [`Machine`] runs a whole program.
//!
//! Machine states share nothing, so independent states can be simulated on
//! separate threads without synchronization.
//!
//! ## Example
//!
//! ```rust
//! use arise_runtime::{evaluate, MachineState};
//! use arise_spec::{InstructionField, Register};
//!
//! let mut state = MachineState::new()
//!     .with(Register::X6, 0xAA)
//!     .with(Register::X7, 0x55);
//! let instr = InstructionField::new(5, 6, 7, 1).unwrap();
//! evaluate(&instr, &mut state);
//! assert_eq!(state.read(Register::X5), 0xAA);
//! ```

pub mod error;
pub mod execute;
pub mod state;
pub mod vm;

pub use error::{Result, RuntimeError};
pub use execute::{evaluate, slli_or};
pub use state::MachineState;
pub use vm::{ExecutionResult, Machine, MachineConfig, TraceRow};

use arise_spec::Program;

/// Simple execution helper
///
/// Runs a program against `state` with the default configuration and
/// returns the final register file.
pub fn run(program: &Program, state: MachineState) -> Result<MachineState> {
    Ok(Machine::new(state, MachineConfig::default()).run(program)?.state)
}

/// Run a program given in its 6-byte-per-word byte form
pub fn run_bytes(bytes: &[u8], state: MachineState) -> Result<MachineState> {
    let program = Program::from_bytes(bytes)?;
    run(&program, state)
}
