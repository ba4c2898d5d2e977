//! Lexical analysis for the instructional Pascal-like language.
//!
//! This module turns source text into classified tokens. It handles:
//!
//! - The static token catalog (spelling to numeric kind code)
//! - The priority-ordered rule table and the line-by-line scanner
//! - Per-kind semantic validation of emitted tokens
//! - Comments and whitespace, which produce no tokens

pub mod lexer;
pub mod tokens;
pub mod validator;
