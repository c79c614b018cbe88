use std::collections::HashMap;
use thiserror::Error;

use frontend::lexer::Token;

#[derive(Debug, Error, PartialEq)]
pub enum EnvError {
    #[error("Function '{0}' not found.")]
    UndeclaredFn(String),
}

// Symbol tables of a single run. Both are filled by the declarations and only
// read once execution starts
#[derive(Debug, Default, PartialEq)]
pub struct Env {
    vars: HashMap<String, String>,
    functions: HashMap<String, Vec<Token>>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    // Re-declaring overwrites the previous value
    pub fn declare_var(&mut self, var: String, value: String) {
        self.vars.insert(var, value);
    }

    pub fn declare_fn(&mut self, name: String, body: Vec<Token>) {
        self.functions.insert(name, body);
    }

    pub fn lookup_var(&self, var: &str) -> Option<&str> {
        self.vars.get(var).map(String::as_str)
    }

    // A name that is not a variable is printed as is
    pub fn resolve_text<'a>(&'a self, text: &'a str) -> &'a str {
        self.lookup_var(text).unwrap_or(text)
    }

    pub fn lookup_fn(&self, name: &str) -> Result<&[Token], EnvError> {
        self.functions
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| EnvError::UndeclaredFn(name.to_string()))
    }

    pub fn clear(&mut self) {
        self.vars.clear();
        self.functions.clear();
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.vars.is_empty() && self.functions.is_empty()
    }
}
