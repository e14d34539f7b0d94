//! Assembly parser
//!
//! Operands are read in the order the instruction's format table lists them,
//! then packed by the format's codec, so range checking happens in exactly
//! one place.

use std::ops::Range;

use arise_spec::format::lookup_mnemonic;
use arise_spec::{InstructionField, InstructionFormat, Operand, Register, INSTRUCTION_BYTES};
use logos::Logos;

use crate::error::{AssemblerError, Result};
use crate::lexer::Token;

/// `.insn 4, <word>` gives only the low 32 bits; the reserved upper bits are zero
const SHORT_INSN_BYTES: i64 = 4;

/// One assembled source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    /// `arise32.slli_or rd, rs1, rs2, imm`
    Instruction(InstructionField),
    /// `.insn 6, <word>` or `.insn 4, <word>`, already validated by the decoder
    Word(u64),
}

impl Statement {
    /// Encoded 48-bit word
    pub fn word(&self) -> u64 {
        match self {
            Statement::Instruction(instr) => instr.encode(),
            Statement::Word(word) => *word,
        }
    }
}

/// Parse a single instruction from assembly text
///
/// Positions in errors are relative to `text`, which counts as line 1.
pub fn parse_instruction(text: &str) -> Result<InstructionField> {
    match parse_line(text, 1)? {
        Some(Statement::Instruction(instr)) => Ok(instr),
        Some(Statement::Word(word)) => InstructionField::decode(word)
            .map_err(|source| AssemblerError::Spec { line: 1, source }),
        None => Err(AssemblerError::SyntaxError {
            line: 1,
            column: 1,
            message: "Empty instruction".to_string(),
        }),
    }
}

/// Parse register name (`x0`..`x31` or ABI name, case-insensitive)
pub fn parse_register(name: &str) -> Result<Register> {
    Register::parse(name.trim()).ok_or_else(|| AssemblerError::InvalidRegister {
        line: 1,
        column: 1,
        name: name.trim().to_string(),
    })
}

/// Parse one source line
///
/// Returns `None` for blank and comment-only lines.
pub fn parse_line(text: &str, line: usize) -> Result<Option<Statement>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(text);
    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(AssemblerError::SyntaxError {
                    line,
                    column: lexer.span().start + 1,
                    message: format!("Unexpected input `{}`", lexer.slice()),
                })
            }
        }
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        line,
        end: text.len(),
    };
    parser.statement()
}

struct Parser {
    tokens: Vec<(Token, Range<usize>)>,
    pos: usize,
    line: usize,
    /// Byte length of the line, for end-of-line columns
    end: usize,
}

impl Parser {
    fn statement(&mut self) -> Result<Option<Statement>> {
        let statement = match self.next() {
            None => return Ok(None),
            Some((Token::Identifier(mnemonic), _)) => {
                let format = lookup_mnemonic(&mnemonic).ok_or(
                    AssemblerError::UnknownInstruction {
                        line: self.line,
                        mnemonic,
                    },
                )?;
                Statement::Instruction(self.instruction(format)?)
            }
            Some((Token::Directive(name), _)) => self.directive(&name)?,
            Some((token, span)) => {
                return Err(self.syntax_error(
                    span.start,
                    format!("Expected instruction or directive, found {:?}", token),
                ))
            }
        };

        if let Some((token, span)) = self.next() {
            return Err(self.syntax_error(span.start, format!("Unexpected trailing {:?}", token)));
        }

        Ok(Some(statement))
    }

    fn instruction(&mut self, format: &InstructionFormat) -> Result<InstructionField> {
        let mut values = Vec::with_capacity(format.operands.len());
        for (i, operand) in format.operands.iter().enumerate() {
            if i > 0 {
                self.expect_comma()?;
            }
            let value = match operand {
                Operand::Register(_) => self.expect_register()?.index() as i64,
                Operand::Immediate(_) => self.expect_integer()?,
            };
            values.push(value);
        }

        let word = format
            .encode_operands(&values)
            .map_err(|source| self.spec_error(source))?;
        InstructionField::decode(word).map_err(|source| self.spec_error(source))
    }

    fn directive(&mut self, name: &str) -> Result<Statement> {
        if !name.eq_ignore_ascii_case("insn") {
            return Err(AssemblerError::InvalidDirective {
                line: self.line,
                message: format!("Unknown directive .{}", name),
            });
        }

        let length = self.expect_integer()?;
        if length != INSTRUCTION_BYTES as i64 && length != SHORT_INSN_BYTES {
            return Err(AssemblerError::InvalidDirective {
                line: self.line,
                message: format!(
                    ".insn length must be {} or {}, found {}",
                    INSTRUCTION_BYTES, SHORT_INSN_BYTES, length
                ),
            });
        }
        self.expect_comma()?;

        let word = self.expect_integer()?;
        if word < 0 {
            return Err(AssemblerError::InvalidDirective {
                line: self.line,
                message: format!(".insn word must not be negative, found {}", word),
            });
        }
        if length == SHORT_INSN_BYTES && word > u32::MAX as i64 {
            return Err(AssemblerError::InvalidDirective {
                line: self.line,
                message: format!(".insn 4 word must fit in 32 bits, found {:#x}", word),
            });
        }
        let word = word as u64;
        InstructionField::decode(word).map_err(|source| self.spec_error(source))?;
        Ok(Statement::Word(word))
    }

    fn next(&mut self) -> Option<(Token, Range<usize>)> {
        let item = self.tokens.get(self.pos).cloned();
        if item.is_some() {
            self.pos += 1;
        }
        item
    }

    fn expect_comma(&mut self) -> Result<()> {
        match self.next() {
            Some((Token::Comma, _)) => Ok(()),
            Some((token, span)) => {
                Err(self.syntax_error(span.start, format!("Expected ',', found {:?}", token)))
            }
            None => Err(self.syntax_error(self.end, "Expected ',', found end of line".to_string())),
        }
    }

    fn expect_register(&mut self) -> Result<Register> {
        match self.next() {
            Some((Token::Identifier(name), span)) => {
                Register::parse(&name).ok_or(AssemblerError::InvalidRegister {
                    line: self.line,
                    column: span.start + 1,
                    name,
                })
            }
            Some((token, span)) => Err(AssemblerError::InvalidRegister {
                line: self.line,
                column: span.start + 1,
                name: format!("{:?}", token),
            }),
            None => Err(self.syntax_error(
                self.end,
                "Expected register, found end of line".to_string(),
            )),
        }
    }

    fn expect_integer(&mut self) -> Result<i64> {
        match self.next() {
            Some((token, span)) => token.as_integer().ok_or(AssemblerError::InvalidImmediate {
                line: self.line,
                column: span.start + 1,
                text: format!("{:?}", token),
            }),
            None => Err(self.syntax_error(
                self.end,
                "Expected integer, found end of line".to_string(),
            )),
        }
    }

    fn syntax_error(&self, offset: usize, message: String) -> AssemblerError {
        AssemblerError::SyntaxError {
            line: self.line,
            column: offset + 1,
            message,
        }
    }

    fn spec_error(&self, source: arise_spec::AriseError) -> AssemblerError {
        AssemblerError::Spec {
            line: self.line,
            source,
        }
    }
}
