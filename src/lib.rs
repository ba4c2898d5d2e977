#![allow(clippy::module_inception)]

use crate::{
    errors::errors::{Diagnostic, DiagnosticTip},
    lexer::tokens::Token,
};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use lexer::lexer::tokenize;

/// One row of the token listing: kind code, lexeme, line.
pub fn format_token_row(token: &Token) -> String {
    format!(
        "Token: {:<2} Lexeme: {:<15} Line: {}",
        token.kind.code(),
        token.lexeme,
        token.line
    )
}

/// Text of the 1-based `line` in `source`, split the same way the scanner splits.
pub fn get_line_at(source: &str, line: usize) -> Option<&str> {
    line.checked_sub(1).and_then(|index| source.lines().nth(index))
}

pub fn render_diagnostic(diagnostic: &Diagnostic, source: &str, file: &str) -> String {
    /*
        Error: IntegerOutOfRange: integer 30000 out of range (0-20000)
        -> code.txt
          |
        3 | x := 30000;
          = Integers must lie between 0 and 20000
    */

    let line_string = diagnostic.get_line().to_string();
    let padding = line_string.len() + 2;
    let mut rendered = String::new();

    rendered.push_str(&format!(
        "Error: {}: {}\n",
        diagnostic.get_error_name(),
        diagnostic.message()
    ));
    rendered.push_str(&format!("-> {}\n", file));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    if let Some(line_text) = get_line_at(source, diagnostic.get_line()) {
        rendered.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
    }

    if let DiagnosticTip::Suggestion(tip) = diagnostic.get_tip() {
        rendered.push_str(&format!("{:>padding$} {}\n", "=", tip));
    }

    rendered
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{Diagnostic, DiagnosticImpl},
        lexer::tokens::{Token, TokenKind},
    };

    #[test]
    fn test_format_token_row() {
        let token = Token {
            kind: TokenKind::Var,
            lexeme: "var".to_string(),
            line: 1,
        };

        assert_eq!(
            super::format_token_row(&token),
            "Token: 2  Lexeme: var             Line: 1"
        );
    }

    #[test]
    fn test_get_line_at() {
        let source = "program demo;\r\nvar x : integer;\nbegin";

        assert_eq!(super::get_line_at(source, 1), Some("program demo;"));
        assert_eq!(super::get_line_at(source, 3), Some("begin"));
        assert_eq!(super::get_line_at(source, 0), None);
        assert_eq!(super::get_line_at(source, 4), None);
    }

    #[test]
    fn test_render_diagnostic() {
        let source = "begin\n   x := 30000;\nend.";
        let diagnostic = Diagnostic::new(
            DiagnosticImpl::IntegerOutOfRange {
                lexeme: "30000".to_string(),
            },
            2,
        );

        assert_eq!(
            super::render_diagnostic(&diagnostic, source, "code.txt"),
            "Error: IntegerOutOfRange: integer 30000 out of range (0-20000)\n\
             -> code.txt\n  \
             |\n\
             2 | x := 30000;\n  \
             = Integers must lie between 0 and 20000\n"
        );
    }

    #[test]
    fn test_render_diagnostic_without_tip() {
        let diagnostic = Diagnostic::new(DiagnosticImpl::UnknownCharacter { character: '@' }, 1);
        let rendered = super::render_diagnostic(&diagnostic, "x @ y", "shell");

        assert!(rendered.ends_with("1 | x @ y\n"));
    }
}
