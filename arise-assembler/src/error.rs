//! Assembler errors

use arise_spec::AriseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("Syntax error at line {line}, column {column}: {message}")]
    SyntaxError {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Unknown instruction at line {line}: {mnemonic}")]
    UnknownInstruction { line: usize, mnemonic: String },

    #[error("Invalid register at line {line}, column {column}: {name}")]
    InvalidRegister {
        line: usize,
        column: usize,
        name: String,
    },

    #[error("Invalid immediate value at line {line}, column {column}: {text}")]
    InvalidImmediate {
        line: usize,
        column: usize,
        text: String,
    },

    #[error("Invalid directive at line {line}: {message}")]
    InvalidDirective { line: usize, message: String },

    #[error("Line {line}: {source}")]
    Spec {
        line: usize,
        #[source]
        source: AriseError,
    },
}

impl AssemblerError {
    /// 1-based source line the error was reported on
    pub fn line(&self) -> usize {
        match self {
            AssemblerError::SyntaxError { line, .. }
            | AssemblerError::UnknownInstruction { line, .. }
            | AssemblerError::InvalidRegister { line, .. }
            | AssemblerError::InvalidImmediate { line, .. }
            | AssemblerError::InvalidDirective { line, .. }
            | AssemblerError::Spec { line, .. } => *line,
        }
    }

    /// Underlying codec error, if any
    pub fn spec_error(&self) -> Option<&AriseError> {
        match self {
            AssemblerError::Spec { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
