pub mod environment;
pub mod interpreter;

extern crate frontend;
extern crate tools;

pub use interpreter::{Interpreter, Output};
pub use tools::errors::{CodeErr, ErrorKind, SYNTAX_ERROR_TAG};

/// Runs a CPS program and returns its output, or the error text tagged with
/// "Syntax Error".
pub fn run(source_code: &str) -> String {
    Interpreter {}.run(source_code)
}

/// Same as [`run`] but keeps the error structured.
pub fn execute(source_code: &str) -> Result<Output, CodeErr> {
    Interpreter {}.execute(source_code)
}
