pub mod ast;
pub mod completion;
pub mod lexer;
pub mod parser;

extern crate tools;

use tools::errors::CodeErr;

use lexer::Lexer;
use parser::{Parser, Program};

/// Runs the declaration pass over a whole source text.
pub fn parse(source_code: &str) -> Result<Program, CodeErr> {
    let mut lexer: Lexer = Default::default();
    let mut parser: Parser = Default::default();

    lexer.tokenize(source_code);
    parser.build_program(std::mem::take(&mut lexer.tokens))?;

    Ok(parser.program)
}
