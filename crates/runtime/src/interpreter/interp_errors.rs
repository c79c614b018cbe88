use thiserror::Error;

use crate::environment::EnvError;
use tools::errors::{ErrorKind, ReportCodeErr};

#[derive(Error, Debug, PartialEq)]
pub enum InterpreterError {
    #[error("Invalid statement '{0}'")]
    InvalidStatement(String),

    // Inner line, then the function it belongs to
    #[error("Invalid statement '{0}' in function '{1}'")]
    InvalidFnStatement(String, String),

    #[error("{0}")]
    InterpFromEnv(#[from] EnvError),
}

// Implement global trait for final error
impl ReportCodeErr for InterpreterError {
    fn kind(&self) -> ErrorKind {
        match self {
            InterpreterError::InvalidStatement(_) => ErrorKind::SyntaxShape,
            InterpreterError::InvalidFnStatement(..) => ErrorKind::InvalidFunctionBody,
            InterpreterError::InterpFromEnv(EnvError::UndeclaredFn(_)) => {
                ErrorKind::UnknownFunction
            }
        }
    }
}
