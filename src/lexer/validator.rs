//! Per-kind semantic checks applied to every emitted token.
//!
//! A check either passes silently or yields one diagnostic; the token itself is
//! always kept.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::{Diagnostic, DiagnosticImpl};

use super::tokens::{Token, TokenKind};

pub const MAX_NUMERIC_VALUE: u64 = 20000;
pub const MAX_VSTRING_LENGTH: usize = 50;
pub const MAX_IDENTIFIER_LENGTH: usize = 10;

lazy_static! {
    static ref REAL_SHAPE: Regex = Regex::new(r"^[0-9]+\.[0-9]{1,2}$").expect("real shape must compile");
    static ref IDENTIFIER_SHAPE: Regex =
        Regex::new(&format!("^[a-zA-Z]{{1,{}}}$", MAX_IDENTIFIER_LENGTH)).expect("identifier shape must compile");
}

pub fn validate(token: &Token) -> Option<Diagnostic> {
    let lexeme = token.lexeme.as_str();

    let error = match token.kind {
        TokenKind::IntegerNumber => validate_integer(lexeme),
        TokenKind::RealNumber => validate_real(lexeme),
        TokenKind::VString => validate_vstring(lexeme),
        TokenKind::Literal => validate_literal(lexeme),
        TokenKind::Identifier => validate_identifier(lexeme),
        _ => None,
    };

    error.map(|error| Diagnostic::new(error, token.line))
}

fn validate_integer(lexeme: &str) -> Option<DiagnosticImpl> {
    if lexeme.is_empty() || !lexeme.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    // all digits, so a parse failure can only mean overflow
    match lexeme.parse::<u64>() {
        Ok(value) if value <= MAX_NUMERIC_VALUE => None,
        _ => Some(DiagnosticImpl::IntegerOutOfRange {
            lexeme: String::from(lexeme),
        }),
    }
}

fn validate_real(lexeme: &str) -> Option<DiagnosticImpl> {
    if !REAL_SHAPE.is_match(lexeme) {
        return Some(DiagnosticImpl::RealMalformed {
            lexeme: String::from(lexeme),
        });
    }

    match lexeme.parse::<f64>() {
        Ok(value) if (0.0..=MAX_NUMERIC_VALUE as f64).contains(&value) => None,
        _ => Some(DiagnosticImpl::RealOutOfRange {
            lexeme: String::from(lexeme),
        }),
    }
}

fn validate_vstring(lexeme: &str) -> Option<DiagnosticImpl> {
    let length = lexeme.trim_matches('\'').chars().count();

    if length > MAX_VSTRING_LENGTH {
        Some(DiagnosticImpl::StringTooLong {
            lexeme: String::from(lexeme),
            length,
        })
    } else {
        None
    }
}

fn validate_literal(lexeme: &str) -> Option<DiagnosticImpl> {
    if lexeme.len() >= 2 && lexeme.starts_with('"') && lexeme.ends_with('"') {
        None
    } else {
        Some(DiagnosticImpl::LiteralMalformed {
            lexeme: String::from(lexeme),
        })
    }
}

fn validate_identifier(lexeme: &str) -> Option<DiagnosticImpl> {
    if IDENTIFIER_SHAPE.is_match(lexeme) {
        None
    } else {
        Some(DiagnosticImpl::IdentifierInvalid {
            lexeme: String::from(lexeme),
        })
    }
}
