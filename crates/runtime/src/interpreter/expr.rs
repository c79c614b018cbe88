use tracing::trace;

use super::{Interpreter, InterpreterError, Output};
use crate::environment::Env;
use crate::frontend::ast::ExpressionKind;
use crate::frontend::lexer::Token;

impl Interpreter {
    pub(super) fn evaluate(
        &self,
        token: &Token,
        env: &Env,
        output: &mut Output,
    ) -> Result<(), InterpreterError> {
        match ExpressionKind::from_token(token) {
            Some(ExpressionKind::Print { text }) => {
                output.push(env.resolve_text(&text));
                Ok(())
            }
            Some(ExpressionKind::Invoke { name }) => self.call_fn(&name, env, output),
            None => Err(InterpreterError::InvalidStatement(token.value.clone())),
        }
    }

    // Function bodies were stored without checks: every line has to be a
    // print, the first one that is not aborts the call
    fn call_fn(&self, name: &str, env: &Env, output: &mut Output) -> Result<(), InterpreterError> {
        let body = env.lookup_fn(name)?;
        trace!(name, lines = body.len(), "call function");

        for line in body {
            match ExpressionKind::print_from_token(line) {
                Some(ExpressionKind::Print { text }) => output.push(env.resolve_text(&text)),
                _ => {
                    return Err(InterpreterError::InvalidFnStatement(
                        line.value.clone(),
                        name.to_string(),
                    ))
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tools::errors::ErrorKind;
    use tools::errors::ReportCodeErr;

    fn eval(env: &Env, token: Token) -> Result<Output, InterpreterError> {
        let interp = Interpreter {};
        let mut output = Output::default();
        interp.evaluate(&token, env, &mut output)?;

        Ok(output)
    }

    #[test]
    fn print_literal() {
        let env = Env::new();
        let output = eval(&env, Token::new_print("hello", 0)).unwrap();

        assert_eq!(output.lines, vec!["hello"]);
    }

    #[test]
    fn print_variable() {
        let mut env = Env::new();
        env.declare_var("x".into(), "world".into());

        let output = eval(&env, Token::new_print("x", 0)).unwrap();
        assert_eq!(output.lines, vec!["world"]);
    }

    #[test]
    fn call_fn_prints_body() {
        let mut env = Env::new();
        env.declare_var("who".into(), "you".into());
        env.declare_fn(
            "greet".into(),
            vec![Token::new_print("hi", 1), Token::new_print("who", 2)],
        );

        let output = eval(&env, Token::new_invoke("greet", 5)).unwrap();
        assert_eq!(output.lines, vec!["hi", "you"]);
    }

    #[test]
    fn call_missing_fn() {
        let env = Env::new();
        let err = eval(&env, Token::new_invoke("missing", 0)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnknownFunction);
        assert_eq!(err.to_string(), "Function 'missing' not found.");
    }

    #[test]
    fn call_fn_with_invalid_line() {
        let mut env = Env::new();
        env.declare_fn(
            "odd".into(),
            vec![
                Token::new_print("ok", 1),
                Token::classify("not a print", 2),
            ],
        );

        let err = eval(&env, Token::new_invoke("odd", 5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFunctionBody);
        assert_eq!(
            err.to_string(),
            "Invalid statement 'not a print' in function 'odd'"
        );
    }

    #[test]
    fn nested_call_is_rejected() {
        let mut env = Env::new();
        env.declare_fn("inner".into(), vec![Token::new_print("a", 1)]);
        env.declare_fn("outer".into(), vec![Token::new_invoke("inner", 3)]);

        let err = eval(&env, Token::new_invoke("outer", 6)).unwrap_err();
        assert_eq!(
            err,
            InterpreterError::InvalidFnStatement("app.getthe^^inner^^".into(), "outer".into())
        );
    }

    #[test]
    fn unknown_statement() {
        let env = Env::new();
        let err = eval(&env, Token::classify("app.add ^^x^^:: value%^^1^^", 0)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::SyntaxShape);
        assert_eq!(
            err,
            InterpreterError::InvalidStatement("app.add ^^x^^:: value%^^1^^".into())
        );
    }
}
