use std::fmt::Display;

use thiserror::Error;

/// A non-fatal lexical or semantic problem tied to a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    internal_error: DiagnosticImpl,
    line: usize,
}

impl Diagnostic {
    pub fn new(error_impl: DiagnosticImpl, line: usize) -> Self {
        Diagnostic {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_impl(&self) -> &DiagnosticImpl {
        &self.internal_error
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn kind(&self) -> DiagnosticKind {
        match &self.internal_error {
            DiagnosticImpl::UnknownCharacter { .. } => DiagnosticKind::UnknownCharacter,
            DiagnosticImpl::IntegerOutOfRange { .. } => DiagnosticKind::IntegerOutOfRange,
            DiagnosticImpl::RealMalformed { .. } => DiagnosticKind::RealMalformed,
            DiagnosticImpl::RealOutOfRange { .. } => DiagnosticKind::RealOutOfRange,
            DiagnosticImpl::StringTooLong { .. } => DiagnosticKind::StringTooLong,
            DiagnosticImpl::LiteralMalformed { .. } => DiagnosticKind::LiteralMalformed,
            DiagnosticImpl::IdentifierInvalid { .. } => DiagnosticKind::IdentifierInvalid,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self.kind() {
            DiagnosticKind::UnknownCharacter => "UnknownCharacter",
            DiagnosticKind::IntegerOutOfRange => "IntegerOutOfRange",
            DiagnosticKind::RealMalformed => "RealMalformed",
            DiagnosticKind::RealOutOfRange => "RealOutOfRange",
            DiagnosticKind::StringTooLong => "StringTooLong",
            DiagnosticKind::LiteralMalformed => "LiteralMalformed",
            DiagnosticKind::IdentifierInvalid => "IdentifierInvalid",
        }
    }

    pub fn get_tip(&self) -> DiagnosticTip {
        match &self.internal_error {
            DiagnosticImpl::UnknownCharacter { .. } => DiagnosticTip::None,
            DiagnosticImpl::IntegerOutOfRange { .. } => {
                DiagnosticTip::Suggestion(String::from("Integers must lie between 0 and 20000"))
            }
            DiagnosticImpl::RealMalformed { .. } => DiagnosticTip::Suggestion(String::from(
                "Reals are written as digits, a dot and one or two decimal digits",
            )),
            DiagnosticImpl::RealOutOfRange { .. } => {
                DiagnosticTip::Suggestion(String::from("Reals must lie between 0 and 20000"))
            }
            DiagnosticImpl::StringTooLong { length, .. } => DiagnosticTip::Suggestion(format!(
                "Shorten the string by {} characters",
                length.saturating_sub(50)
            )),
            DiagnosticImpl::LiteralMalformed { .. } => {
                DiagnosticTip::Suggestion(String::from("Did you miss a closing `\"`?"))
            }
            DiagnosticImpl::IdentifierInvalid { .. } => DiagnosticTip::Suggestion(String::from(
                "Identifiers are 1 to 10 ASCII letters",
            )),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.internal_error)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DiagnosticKind {
    UnknownCharacter,
    IntegerOutOfRange,
    RealMalformed,
    RealOutOfRange,
    StringTooLong,
    LiteralMalformed,
    IdentifierInvalid,
}

pub enum DiagnosticTip {
    None,
    Suggestion(String),
}

impl Display for DiagnosticTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticTip::None => write!(f, ""),
            DiagnosticTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticImpl {
    #[error("unknown character {character:?}")]
    UnknownCharacter { character: char },
    #[error("integer {lexeme} out of range (0-20000)")]
    IntegerOutOfRange { lexeme: String },
    #[error("malformed real {lexeme:?}")]
    RealMalformed { lexeme: String },
    #[error("real {lexeme} out of range (0-20000)")]
    RealOutOfRange { lexeme: String },
    #[error("string longer than 50 characters ({length})")]
    StringTooLong { lexeme: String, length: usize },
    #[error("malformed literal {lexeme}")]
    LiteralMalformed { lexeme: String },
    #[error("invalid identifier {lexeme:?}")]
    IdentifierInvalid { lexeme: String },
}

/// Append-only, scan-ordered collection of diagnostics.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        DiagnosticSink::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(
            line = diagnostic.get_line(),
            kind = diagnostic.get_error_name(),
            "{}",
            diagnostic.message()
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
