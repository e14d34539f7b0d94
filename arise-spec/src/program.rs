//! # Program Container
//!
//! A program is an ordered list of 48-bit instruction words. Its byte form
//! is the words themselves, 6 bytes each, little-endian, with no header.

use crate::encoding::{INSTRUCTION_BYTES, WORD_MASK};
use crate::error::{AriseError, FormatReason, Result};
use crate::instruction::InstructionField;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Instruction words (only the low 48 bits are significant)
    pub code: Vec<u64>,
}

impl Program {
    /// Create a new empty program
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words(code: Vec<u64>) -> Self {
        Self { code }
    }

    /// Append an instruction
    pub fn push(&mut self, instr: &InstructionField) {
        self.code.push(instr.encode());
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Size of the byte form
    pub fn byte_len(&self) -> usize {
        self.code.len() * INSTRUCTION_BYTES
    }

    /// Serialize to bytes
    ///
    /// Fails on the first word with bits set above bit 47; such a word has
    /// no 6-byte form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.byte_len());
        for &word in &self.code {
            if word & !WORD_MASK != 0 {
                return Err(AriseError::Format {
                    word,
                    reason: FormatReason::TooWide,
                });
            }
            bytes.extend_from_slice(&word.to_le_bytes()[..INSTRUCTION_BYTES]);
        }
        Ok(bytes)
    }

    /// Deserialize from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % INSTRUCTION_BYTES != 0 {
            return Err(AriseError::InvalidProgramSize {
                found: bytes.len(),
                word_bytes: INSTRUCTION_BYTES,
            });
        }

        let code = bytes
            .chunks_exact(INSTRUCTION_BYTES)
            .map(|chunk| {
                let mut buf = [0u8; 8];
                buf[..INSTRUCTION_BYTES].copy_from_slice(chunk);
                u64::from_le_bytes(buf)
            })
            .collect();

        Ok(Self { code })
    }

    /// Decode every word, stopping at the first invalid one
    pub fn instructions(&self) -> Result<Vec<InstructionField>> {
        self.code.iter().map(|&word| InstructionField::decode(word)).collect()
    }

    /// SHA-256 of the byte form
    pub fn digest(&self) -> Result<[u8; 32]> {
        let mut hasher = Sha256::new();
        hasher.update(self.to_bytes()?);
        Ok(hasher.finalize().into())
    }
}

impl FromIterator<InstructionField> for Program {
    fn from_iter<I: IntoIterator<Item = InstructionField>>(iter: I) -> Self {
        Self {
            code: iter.into_iter().map(|instr| instr.encode()).collect(),
        }
    }
}
