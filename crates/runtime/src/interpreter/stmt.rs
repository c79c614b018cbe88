use tracing::trace;

use super::Interpreter;
use crate::environment::Env;
use crate::frontend::ast::StatementKind;

impl Interpreter {
    // Declarations never fail, their shape was checked by the parser
    pub(super) fn resolve(&self, stmt: StatementKind, env: &mut Env) {
        match stmt {
            StatementKind::VarDeclaration { name, value } => {
                trace!(%name, %value, "declare variable");
                env.declare_var(name, value);
            }
            StatementKind::FnDeclaration { name, body } => {
                trace!(%name, lines = body.len(), "declare function");
                env.declare_fn(name, body);
            }
        }
    }
}
