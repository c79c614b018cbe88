use std::collections::VecDeque;

// Statement delimiters of the language
pub const RUN_MARKER: &str = "if!app.run ^^true^^::do";
pub const VAR_PREFIX: &str = "app.add ^^";
pub const VAR_SEPARATOR: &str = ":: value%";
pub const FN_OPEN_PREFIX: &str = "app.get::^^";
pub const BLOCK_CLOSE: &str = "!";
pub const PRINT_PREFIX: &str = "Console.line^^";
pub const INVOKE_PREFIX: &str = "app.getthe^^";
pub const DELIMITER: &str = "^^";

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    RunMarker,
    VarDecl,
    FnOpen,
    FnClose,
    Print,
    Invoke,
    Unknown,
}

// One token per non empty source line. `value` is the trimmed line and
// `inner` the trimmed text between the delimiters (empty when the shape has none)
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub inner: String,
    pub line: u64,
}

impl Token {
    pub fn new(kind: TokenKind, value: String, inner: String, line: u64) -> Self {
        Self {
            kind,
            value,
            inner,
            line,
        }
    }

    /// Classifies a single trimmed line.
    pub fn classify(value: &str, line: u64) -> Self {
        if value == RUN_MARKER {
            return Self::new_run_marker(line);
        }

        if value == BLOCK_CLOSE {
            return Self::new_close(line);
        }

        // Variable declarations are only recognized here, their structure is
        // checked by the parser so a broken one reports as malformed
        if value.starts_with(VAR_PREFIX) && value.contains(VAR_SEPARATOR) {
            return Self::new(TokenKind::VarDecl, value.into(), String::new(), line);
        }

        let shapes = [
            (TokenKind::Print, PRINT_PREFIX),
            (TokenKind::Invoke, INVOKE_PREFIX),
            (TokenKind::FnOpen, FN_OPEN_PREFIX),
        ];

        for (kind, prefix) in shapes {
            if let Some(inner) = delimited(value, prefix) {
                return Self::new(kind, value.into(), inner.trim().into(), line);
            }
        }

        Self::new(TokenKind::Unknown, value.into(), String::new(), line)
    }

    pub fn new_run_marker(line: u64) -> Self {
        Self::new(TokenKind::RunMarker, RUN_MARKER.into(), String::new(), line)
    }

    pub fn new_close(line: u64) -> Self {
        Self::new(TokenKind::FnClose, BLOCK_CLOSE.into(), String::new(), line)
    }

    pub fn new_print(text: &str, line: u64) -> Self {
        Self::classify(&format!("{PRINT_PREFIX}{text}{DELIMITER}"), line)
    }

    pub fn new_invoke(name: &str, line: u64) -> Self {
        Self::classify(&format!("{INVOKE_PREFIX}{name}{DELIMITER}"), line)
    }

}

// Text between `prefix` and the trailing delimiter. The two may share the
// same carets ("Console.line^^" alone), the text is then empty
pub fn delimited<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    if !(value.starts_with(prefix) && value.ends_with(DELIMITER)) {
        return None;
    }

    Some(
        value
            .get(prefix.len()..value.len() - DELIMITER.len())
            .unwrap_or(""),
    )
}

#[derive(Default)]
pub struct Lexer {
    pub tokens: VecDeque<Token>,
}

impl Lexer {
    // Lines are trimmed and blank ones dropped. Line numbers still count the
    // dropped lines so diagnostics point at the real source line
    pub fn tokenize(&mut self, source_code: &str) {
        self.tokens.clear();

        for (line, raw) in source_code.lines().enumerate() {
            let trimmed = raw.trim();

            if trimmed.is_empty() {
                continue;
            }

            self.tokens.push_back(Token::classify(trimmed, line as u64));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl Token {
        fn new_fn_open(name: &str, line: u64) -> Self {
            Self::classify(&format!("{FN_OPEN_PREFIX}{name}{DELIMITER}"), line)
        }
    }

    fn kinds(lexer: &Lexer) -> Vec<TokenKind> {
        lexer.tokens.iter().map(|t| t.kind.clone()).collect()
    }

    #[test]
    fn tokenize_skips_blank_lines() {
        let mut lexer: Lexer = Default::default();
        lexer.tokenize("\n   \nif!app.run ^^true^^::do\r\n\t\n!\n");

        assert_eq!(
            lexer.tokens,
            vec![Token::new_run_marker(2), Token::new_close(4)]
        );
    }

    #[test]
    fn tokenize_trims_lines() {
        let mut lexer: Lexer = Default::default();
        lexer.tokenize("   Console.line^^ hello ^^   ");

        let tok = &lexer.tokens[0];
        assert_eq!(tok.kind, TokenKind::Print);
        assert_eq!(tok.value, "Console.line^^ hello ^^");
        assert_eq!(tok.inner, "hello");
    }

    #[test]
    fn tokenize_every_shape() {
        let mut lexer: Lexer = Default::default();
        lexer.tokenize(
            "app.add ^^x^^:: value%^^1^^
app.get::^^greet^^
!
if!app.run ^^true^^::do
Console.line^^x^^
app.getthe^^greet^^
let x = 5",
        );

        assert_eq!(
            kinds(&lexer),
            vec![
                TokenKind::VarDecl,
                TokenKind::FnOpen,
                TokenKind::FnClose,
                TokenKind::RunMarker,
                TokenKind::Print,
                TokenKind::Invoke,
                TokenKind::Unknown,
            ]
        );
    }

    #[test]
    fn run_marker_must_be_exact() {
        let tok = Token::classify("if!app.run ^^true^^::do please", 0);
        assert_eq!(tok.kind, TokenKind::Unknown);
    }

    #[test]
    fn invoke_and_fn_open_are_distinct() {
        assert_eq!(Token::new_invoke("f", 0).kind, TokenKind::Invoke);
        assert_eq!(Token::new_fn_open("f", 0).kind, TokenKind::FnOpen);
        assert_eq!(Token::new_invoke("f", 0).inner, "f");
    }

    #[test]
    fn delimiters_may_overlap() {
        for line in ["Console.line^^", "Console.line^^^", "Console.line^^^^"] {
            let tok = Token::classify(line, 0);
            assert_eq!(tok.kind, TokenKind::Print, "{line}");
            assert_eq!(tok.inner, "", "{line}");
        }

        let tok = Token::classify("app.getthe^^", 0);
        assert_eq!(tok.kind, TokenKind::Invoke);
        assert_eq!(tok.inner, "");

        let tok = Token::classify("app.get::^^", 0);
        assert_eq!(tok.kind, TokenKind::FnOpen);
        assert_eq!(tok.inner, "");
    }

    #[test]
    fn missing_closing_delimiter() {
        assert_eq!(Token::classify("Console.line^^hi", 0).kind, TokenKind::Unknown);
        assert_eq!(Token::classify("app.get::^^f^", 0).kind, TokenKind::Unknown);
    }

    #[test]
    fn var_decl_is_recognized_before_validation() {
        // Broken structure but still a declaration attempt
        let tok = Token::classify("app.add ^^x:: value%y", 0);
        assert_eq!(tok.kind, TokenKind::VarDecl);

        // No separator at all: not a declaration
        let tok = Token::classify("app.add ^^x^^", 0);
        assert_eq!(tok.kind, TokenKind::Unknown);
    }
}
