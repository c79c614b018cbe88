mod expr;
mod interp_errors;
mod stmt;

use std::fmt::Display;

use tools::errors::{CodeErr, ReportCodeErr};
use tracing::debug;

pub use interp_errors::InterpreterError;

use super::environment::Env;
use crate::frontend::parser::Program;

/// Lines printed by a program, in order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Output {
    pub lines: Vec<String>,
}

impl Output {
    pub fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Interpreter {}

impl Interpreter {
    /// Runs a whole source text. Never fails: errors come back as text
    /// starting with "Syntax Error".
    pub fn run(&self, source_code: &str) -> String {
        match self.execute(source_code) {
            Ok(output) => output.to_string(),
            Err(e) => e.to_string(),
        }
    }

    // Both passes on a fresh environment, nothing survives the call
    pub fn execute(&self, source_code: &str) -> Result<Output, CodeErr> {
        let program = frontend::parse(source_code)?;
        let mut env = Env::new();

        self.execute_program(program, &mut env)
    }

    pub fn execute_program(&self, program: Program, env: &mut Env) -> Result<Output, CodeErr> {
        debug!(
            declarations = program.declarations.len(),
            statements = program.body.len(),
            "executing program"
        );

        for decl in program.declarations {
            self.resolve(decl.node, env);
        }

        let mut output = Output::default();

        // First error stops the run, partial output is dropped
        for token in &program.body {
            self.evaluate(token, env, &mut output)
                .map_err(|e| e.to_glob_err(token.line))?;
        }

        Ok(output)
    }
}
