//! Main assembler logic

use arise_spec::Program;
use tracing::debug;

use crate::error::Result;
use crate::parser::{parse_line, Statement};

/// Assemble source code into a program
///
/// Stops at the first line that fails to parse.
pub fn assemble(source: &str) -> Result<Program> {
    let statements = parse_source(source)?;
    let program = Program::from_words(statements.iter().map(Statement::word).collect());
    debug!(words = program.len(), "assembled program");
    Ok(program)
}

/// Parse every non-blank line of `source`
pub fn parse_source(source: &str) -> Result<Vec<Statement>> {
    let mut statements = Vec::new();

    for (line_num, line) in source.lines().enumerate() {
        if let Some(statement) = parse_line(line, line_num + 1)? {
            debug!(line = line_num + 1, word = statement.word(), "parsed statement");
            statements.push(statement);
        }
    }

    Ok(statements)
}
