use thiserror::*;

use crate::lexer::RUN_MARKER;
use tools::errors::{ErrorKind, ReportCodeErr};

#[derive(Error, Debug, PartialEq)]
pub enum ParserError {
    #[error("Invalid variable declaration '{0}'")]
    InvalidVarDeclaration(String),

    #[error("Invalid function declaration '{0}'")]
    InvalidFnDeclaration(String),

    #[error("Invalid declaration '{0}'")]
    InvalidDeclaration(String),

    #[error("Expected '{}' before execution.", RUN_MARKER)]
    MissingRunMarker,
}

// Implement global trait for final error
impl ReportCodeErr for ParserError {
    fn kind(&self) -> ErrorKind {
        match self {
            ParserError::InvalidVarDeclaration(_) | ParserError::InvalidFnDeclaration(_) => {
                ErrorKind::MalformedDeclaration
            }
            ParserError::InvalidDeclaration(_) => ErrorKind::SyntaxShape,
            ParserError::MissingRunMarker => ErrorKind::UnboundRun,
        }
    }
}
