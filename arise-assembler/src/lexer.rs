//! # Lexer for ARISE Assembly Language
//!
//! Source is lexed one line at a time, so newlines never reach the token
//! stream. Comments start with `#`, `;` or `//` and run to end of line.

use logos::Logos;

/// Tokens for ARISE assembly
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip r"#[^\n]*")]
#[logos(skip r";[^\n]*")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    /// Mnemonics (`arise32.slli_or`) and register names (`x5`, `t0`)
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*(\.[a-zA-Z_][a-zA-Z0-9_]*)*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Decimal number
    #[regex(r"-?[0-9]+", |lex| parse_signed(lex.slice(), 0, 10))]
    Number(i64),

    /// Hexadecimal number
    #[regex(r"-?0[xX][0-9a-fA-F]+", |lex| parse_signed(lex.slice(), 2, 16))]
    Hex(i64),

    /// Binary number
    #[regex(r"-?0[bB][01]+", |lex| parse_signed(lex.slice(), 2, 2))]
    Binary(i64),

    /// Directive (`.insn`)
    #[regex(r"\.[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice()[1..].to_string())]
    Directive(String),

    #[token(",")]
    Comma,
}

impl Token {
    /// Numeric value of a number token
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Token::Number(value) | Token::Hex(value) | Token::Binary(value) => Some(*value),
            _ => None,
        }
    }
}

/// Parse an optionally negated literal, skipping a `prefix_len`-byte radix prefix
fn parse_signed(slice: &str, prefix_len: usize, radix: u32) -> Option<i64> {
    let (negative, digits) = match slice.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, slice),
    };
    let value = i64::from_str_radix(&digits[prefix_len..], radix).ok()?;
    Some(if negative { -value } else { value })
}
