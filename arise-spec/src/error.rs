//! # Error Types for the ARISE codec

use thiserror::Error;

/// Why a word was rejected by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatReason {
    #[error("opcode bits {found:#05x} do not match expected {expected:#05x}")]
    OpcodeMismatch { expected: u16, found: u16 },

    #[error("word does not fit in 48 bits")]
    TooWide,

    #[error("reserved bits [47:32] are not zero")]
    ReservedBitsSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AriseError {
    /// A field value does not fit its declared bit width
    #[error("Field `{field}` value {value} out of range ({min}..={max})")]
    Range {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A decoded word is not a valid instruction of this format
    #[error("Invalid instruction word {word:#014x}: {reason}")]
    Format { word: u64, reason: FormatReason },

    #[error("Invalid program size: {found} bytes is not a multiple of {word_bytes}")]
    InvalidProgramSize { found: usize, word_bytes: usize },
}

impl AriseError {
    /// Check if this error came from encoding an out-of-range field
    pub fn is_range_error(&self) -> bool {
        matches!(self, AriseError::Range { .. })
    }

    /// Check if this error came from decoding a malformed word
    pub fn is_format_error(&self) -> bool {
        matches!(self, AriseError::Format { .. })
    }
}

pub type Result<T> = std::result::Result<T, AriseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AriseError::Range {
            field: "imm",
            value: 128,
            min: -128,
            max: 127,
        };
        assert_eq!(
            err.to_string(),
            "Field `imm` value 128 out of range (-128..=127)"
        );

        let err = AriseError::Format {
            word: 0x2C,
            reason: FormatReason::OpcodeMismatch {
                expected: 0x2B,
                found: 0x2C,
            },
        };
        assert_eq!(
            err.to_string(),
            "Invalid instruction word 0x00000000002c: opcode bits 0x02c do not match expected 0x02b"
        );
    }

    #[test]
    fn test_error_kinds() {
        let range = AriseError::Range {
            field: "rd",
            value: 32,
            min: 0,
            max: 31,
        };
        assert!(range.is_range_error());
        assert!(!range.is_format_error());

        let format = AriseError::Format {
            word: 1 << 40,
            reason: FormatReason::ReservedBitsSet,
        };
        assert!(format.is_format_error());
        assert!(!format.is_range_error());
    }
}
