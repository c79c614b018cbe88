use std::fmt::Display;

use crate::lexer::{Token, TokenKind};

#[derive(Debug, PartialEq, Clone)]
pub struct ASTNode {
    pub node: StatementKind,
    pub line: u64,
}

impl ASTNode {
    pub fn new(node: StatementKind, line: u64) -> Self {
        Self { node, line }
    }
}

// Declarations found before the run marker
#[derive(Debug, PartialEq, Clone)]
pub enum StatementKind {
    VarDeclaration {
        name: String,
        value: String,
    },
    FnDeclaration {
        name: String,
        // Body lines are kept as tokens and only checked when the function
        // is called
        body: Vec<Token>,
    },
}

// Statements allowed after the run marker
#[derive(Debug, PartialEq, Clone)]
pub enum ExpressionKind {
    // Text is either a variable name or a literal
    Print { text: String },
    Invoke { name: String },
}

impl ExpressionKind {
    pub fn from_token(token: &Token) -> Option<Self> {
        match token.kind {
            TokenKind::Print => Some(ExpressionKind::Print {
                text: token.inner.clone(),
            }),
            TokenKind::Invoke => Some(ExpressionKind::Invoke {
                name: token.inner.clone(),
            }),
            _ => None,
        }
    }

    // Only prints may appear inside a function body
    pub fn print_from_token(token: &Token) -> Option<Self> {
        match Self::from_token(token) {
            p @ Some(ExpressionKind::Print { .. }) => p,
            _ => None,
        }
    }
}

/// Result of the declaration pass: every declaration in source order, and
/// the statements between the run marker and the closing line.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    pub declarations: Vec<ASTNode>,
    pub body: Vec<Token>,
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Declarations:")?;
        for decl in &self.declarations {
            match &decl.node {
                StatementKind::VarDeclaration { name, value } => {
                    writeln!(f, "  {:>4} | var {name} = {value:?}", decl.line + 1)?
                }
                StatementKind::FnDeclaration { name, body } => {
                    writeln!(f, "  {:>4} | fn {name} ({} lines)", decl.line + 1, body.len())?;
                    for line in body {
                        writeln!(f, "  {:>4} |     {}", line.line + 1, line.value)?;
                    }
                }
            }
        }

        writeln!(f, "Body:")?;
        for tok in &self.body {
            writeln!(f, "  {:>4} | {:?} {}", tok.line + 1, tok.kind, tok.value)?;
        }

        Ok(())
    }
}
