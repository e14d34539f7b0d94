//! # ARISE Disassembler
//!
//! Render ARISE instruction words as assembly text that the assembler
//! accepts back unchanged.
//!
//! ## Example
//!
//! ```rust
//! use arise_disassembler::{disassemble, FormatOptions};
//! use arise_spec::Program;
//!
//! let program = Program::from_words(vec![0x0139_8A2B]);
//! let opts = FormatOptions { show_offsets: false, ..FormatOptions::default() };
//! assert_eq!(disassemble(&program, &opts), "arise32.slli_or x5, x6, x7, 1\n");
//! ```

pub mod disassembler;
pub mod error;
pub mod formatter;

pub use disassembler::{disassemble, disassemble_bytes};
pub use error::{DisassemblerError, Result};
pub use formatter::{format, format_immediate, FormatOptions, Radix};
