use std::collections::VecDeque;

mod errors_parser;
mod fn_parser;
mod var_parser;

pub use crate::ast::{ASTNode, ExpressionKind, Program, StatementKind};
pub use crate::lexer::{Token, TokenKind};
pub use errors_parser::ParserError;

use tools::errors::{CodeErr, ReportCodeErr};
use tracing::{debug, trace};

// Function whose closing '!' has not been seen yet
#[derive(Debug)]
struct OpenFn {
    name: String,
    body: Vec<Token>,
    line: u64,
}

#[derive(Default)]
pub struct Parser {
    tokens: VecDeque<Token>,
    open_fn: Option<OpenFn>,
    pub program: Program,
}

impl Parser {
    // Declaration pass. Consumes the tokens up to the run marker, then keeps
    // everything after it except the final closing line as the body
    pub fn build_program(&mut self, tokens: VecDeque<Token>) -> Result<(), CodeErr> {
        self.program = Program::default();
        self.open_fn = None;
        self.tokens = tokens;

        let mut found_marker = false;

        while let Some(token) = self.eat() {
            if token.kind == TokenKind::RunMarker {
                debug!(line = token.line, "run marker found");
                found_marker = true;
                break;
            }

            let line = token.line;
            self.parse_declaration(token)
                .map_err(|e| e.to_glob_err(line))?;
        }

        if !found_marker {
            return Err(ParserError::MissingRunMarker.to_unlocated_err());
        }

        if let Some(open) = self.open_fn.take() {
            debug!(name = %open.name, "discarding unclosed function");
        }

        let mut body: Vec<Token> = self.tokens.drain(..).collect();
        // Closing line of the execution block, never validated
        body.pop();
        self.program.body = body;

        Ok(())
    }

    fn parse_declaration(&mut self, token: Token) -> Result<(), ParserError> {
        match token.kind {
            // Recognized even inside an open function
            TokenKind::VarDecl => {
                let node = self.parse_var_declaration(&token)?;
                trace!(?node, "variable declared");
                self.program.declarations.push(node);
            }
            TokenKind::FnOpen => self.open_fn_declaration(token)?,
            _ if self.open_fn.is_some() => self.push_fn_line(token),
            _ => return Err(ParserError::InvalidDeclaration(token.value)),
        }

        Ok(())
    }

    fn eat(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }
}
