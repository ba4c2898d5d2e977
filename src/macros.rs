//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a rule handler that emits a fixed kind

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The matched source text
/// * `$line` - The 1-based source line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerNumber, "42".to_string(), 3);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            line: $line,
        }
    };
}

/// Creates a rule handler that emits the matched text with a fixed kind.
///
/// # Example
///
/// ```ignore
/// Rule::new("integer", "[0-9]+", MK_DEFAULT_HANDLER!(TokenKind::IntegerNumber))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, lexeme: &str| {
            lexer.emit($kind, lexeme);
        }
    };
}
