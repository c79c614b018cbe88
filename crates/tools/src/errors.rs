use std::fmt::Display;

/// Prefix carried by every error rendered for the caller. Front ends look for
/// it to tell a failed run apart from program output.
pub const SYNTAX_ERROR_TAG: &str = "Syntax Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A line matches no statement shape allowed in its phase
    SyntaxShape,
    /// Declaration opener found but the rest of the line is broken
    MalformedDeclaration,
    /// No run marker in the source
    UnboundRun,
    UnknownFunction,
    /// Function body line that is not a print, found when the function is called
    InvalidFunctionBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeErr {
    pub kind: ErrorKind,
    pub message: String,
    // Zero based, None when the error is not tied to a line
    pub line: Option<u64>,
}

impl CodeErr {
    /// Line number as shown to users (one based).
    pub fn display_line(&self) -> Option<u64> {
        self.line.map(|l| l + 1)
    }
}

impl Display for CodeErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", SYNTAX_ERROR_TAG, self.message)
    }
}

impl std::error::Error for CodeErr {}

pub trait ReportCodeErr {
    fn kind(&self) -> ErrorKind;

    fn to_glob_err(&self, line: u64) -> CodeErr
    where
        Self: std::fmt::Display,
    {
        CodeErr {
            kind: self.kind(),
            message: self.to_string(),
            line: Some(line),
        }
    }

    fn to_unlocated_err(&self) -> CodeErr
    where
        Self: std::fmt::Display,
    {
        CodeErr {
            kind: self.kind(),
            message: self.to_string(),
            line: None,
        }
    }
}
