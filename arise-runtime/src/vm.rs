//! Sequential program runner for ARISE

use crate::error::{Result, RuntimeError};
use crate::execute::evaluate;
use crate::state::MachineState;
use arise_spec::{InstructionField, Program, Register};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Runner configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    /// Maximum number of instructions to execute
    pub max_steps: u64,

    /// Record a [`TraceRow`] for every executed instruction
    pub collect_trace: bool,
}

impl MachineConfig {
    pub const DEFAULT: Self = Self {
        max_steps: 1_000_000,
        collect_trace: false,
    };
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One executed instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRow {
    /// Position of the word in the program
    pub index: usize,
    /// Encoded instruction word
    pub word: u64,
    /// Destination register
    pub rd: Register,
    /// Value written to `rd`, `None` when `rd` is `x0`
    pub value: Option<i32>,
}

/// Execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Number of instructions executed
    pub steps: u64,

    /// Register file after the last instruction
    pub state: MachineState,

    /// Per-instruction trace (empty unless `collect_trace` is set)
    pub trace: Vec<TraceRow>,
}

impl ExecutionResult {
    /// Number of executed instructions that wrote a register
    pub fn write_count(&self) -> usize {
        self.trace.iter().filter(|row| row.value.is_some()).count()
    }
}

/// Runs a program front to back against a register file
#[derive(Debug, Clone)]
pub struct Machine {
    state: MachineState,
    config: MachineConfig,
}

impl Machine {
    pub fn new(state: MachineState, config: MachineConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    /// Execute a single decoded instruction
    pub fn step(&mut self, instr: &InstructionField) -> Option<i32> {
        evaluate(instr, &mut self.state)
    }

    /// Decode and execute every word of `program` in order
    ///
    /// Stops at the first word that does not decode. The word count is
    /// checked against `max_steps` before anything executes.
    pub fn run(mut self, program: &Program) -> Result<ExecutionResult> {
        let steps = program.len() as u64;
        if steps > self.config.max_steps {
            return Err(RuntimeError::StepLimitExceeded {
                limit: self.config.max_steps,
            });
        }

        let mut trace = Vec::new();
        if self.config.collect_trace {
            trace.reserve(program.len());
        }

        for (index, &word) in program.code.iter().enumerate() {
            let instr = InstructionField::decode(word)
                .map_err(|source| RuntimeError::Decode { index, source })?;

            debug!(index, word, %instr, "execute");
            let value = self.step(&instr);

            if self.config.collect_trace {
                trace.push(TraceRow {
                    index,
                    word,
                    rd: instr.rd(),
                    value,
                });
            }
        }

        info!(steps, "program finished");

        Ok(ExecutionResult {
            steps,
            state: self.state,
            trace,
        })
    }
}
