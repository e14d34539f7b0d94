//! Disassembler errors

use arise_spec::AriseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisassemblerError {
    #[error("Spec error: {0}")]
    Spec(#[from] AriseError),
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
