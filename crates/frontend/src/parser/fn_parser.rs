use tracing::trace;

use super::errors_parser::ParserError;
use super::{ASTNode, OpenFn, Parser, StatementKind, Token, TokenKind};

impl Parser {
    // Function declaration. The syntax is:
    // app.get::^^greet^^
    // Console.line^^hello^^
    // !
    // Opening a function while another one is open drops the first one
    pub(super) fn open_fn_declaration(&mut self, token: Token) -> Result<(), ParserError> {
        if token.inner.is_empty() {
            return Err(ParserError::InvalidFnDeclaration(token.value));
        }

        if let Some(previous) = self.open_fn.take() {
            trace!(name = %previous.name, "unclosed function replaced");
        }

        self.open_fn = Some(OpenFn {
            name: token.inner,
            body: Vec::new(),
            line: token.line,
        });

        Ok(())
    }

    // Body lines are stored as is, without any check
    pub(super) fn push_fn_line(&mut self, token: Token) {
        if token.kind == TokenKind::FnClose {
            if let Some(open) = self.open_fn.take() {
                trace!(name = %open.name, lines = open.body.len(), "function declared");

                self.program.declarations.push(ASTNode::new(
                    StatementKind::FnDeclaration {
                        name: open.name,
                        body: open.body,
                    },
                    open.line,
                ));
            }
        } else if let Some(open) = self.open_fn.as_mut() {
            open.body.push(token);
        }
    }
}
