//! ARISE Assembler
//!
//! Assemble ARISE custom-instruction assembly into 48-bit instruction words.
//!
//! ## Example
//!
//! ```rust
//! use arise_assembler::assemble;
//!
//! let source = r#"
//!     arise32.slli_or x5, x6, x7, 1
//!     .insn 6, 0x01398a2b
//! "#;
//!
//! let program = assemble(source).unwrap();
//! assert_eq!(program.code, vec![0x0139_8A2B, 0x0139_8A2B]);
//! ```

pub mod assembler;
pub mod error;
pub mod lexer;
pub mod parser;

pub use assembler::{assemble, parse_source};
pub use error::{AssemblerError, Result};
pub use parser::{parse_instruction, parse_line, parse_register, Statement};
