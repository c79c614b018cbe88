use super::errors_parser::ParserError;
use super::Parser;
use super::{ASTNode, StatementKind, Token};
use crate::lexer::{DELIMITER, VAR_PREFIX, VAR_SEPARATOR};

impl Parser {
    // Variable declaration. The syntax is:
    // app.add ^^name^^:: value%^^value^^
    // Name and value are trimmed, the value is always a string
    pub(super) fn parse_var_declaration(&self, token: &Token) -> Result<ASTNode, ParserError> {
        let invalid = || ParserError::InvalidVarDeclaration(token.value.clone());

        // The separator includes the opening delimiter of the value
        let separator = format!("{VAR_SEPARATOR}{DELIMITER}");
        let mut parts = token.value.split(separator.as_str());

        let (Some(name_part), Some(value_part), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let name = name_part
            .strip_prefix(VAR_PREFIX)
            .and_then(|n| n.strip_suffix(DELIMITER))
            .ok_or_else(invalid)?;

        let value = value_part.strip_suffix(DELIMITER).ok_or_else(invalid)?;

        Ok(ASTNode::new(
            StatementKind::VarDeclaration {
                name: name.trim().into(),
                value: value.trim().into(),
            },
            token.line,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_line(line: &str) -> Result<ASTNode, ParserError> {
        let parser: Parser = Default::default();
        parser.parse_var_declaration(&Token::classify(line, 0))
    }

    fn var(name: &str, value: &str) -> ASTNode {
        ASTNode::new(
            StatementKind::VarDeclaration {
                name: name.into(),
                value: value.into(),
            },
            0,
        )
    }

    #[test]
    fn parse_simple_var() {
        assert_eq!(
            parse_line("app.add ^^x^^:: value%^^world^^"),
            Ok(var("x", "world"))
        );
    }

    #[test]
    fn parse_var_trims_parts() {
        assert_eq!(
            parse_line("app.add ^^  greeting ^^:: value%^^  hello there  ^^"),
            Ok(var("greeting", "hello there"))
        );
    }

    #[test]
    fn parse_var_empty_value() {
        assert_eq!(parse_line("app.add ^^x^^:: value%^^^^"), Ok(var("x", "")));
    }

    #[test]
    fn parse_var_missing_value_delimiter() {
        let line = "app.add ^^x^^:: value%^^world";
        assert_eq!(
            parse_line(line),
            Err(ParserError::InvalidVarDeclaration(line.into()))
        );
    }

    #[test]
    fn parse_var_missing_name_delimiter() {
        let line = "app.add ^^x:: value%^^world^^";
        assert_eq!(
            parse_line(line),
            Err(ParserError::InvalidVarDeclaration(line.into()))
        );
    }

    #[test]
    fn parse_var_separator_without_delimiter() {
        let line = "app.add ^^x^^:: value%world^^";
        assert!(matches!(
            parse_line(line),
            Err(ParserError::InvalidVarDeclaration(_))
        ));
    }

    #[test]
    fn parse_var_two_separators() {
        let line = "app.add ^^x^^:: value%^^a^^:: value%^^b^^";
        assert!(matches!(
            parse_line(line),
            Err(ParserError::InvalidVarDeclaration(_))
        ));
    }

    #[test]
    fn parse_var_value_with_carets() {
        // Only the trailing delimiter is removed
        assert_eq!(
            parse_line("app.add ^^x^^:: value%^^a^^b^^"),
            Ok(var("x", "a^^b"))
        );
    }
}
