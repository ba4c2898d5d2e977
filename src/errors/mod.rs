//! Diagnostics produced while scanning.
//!
//! Nothing in here is fatal: every problem the lexer finds is recorded with
//! its source line and scanning carries on. This module holds:
//!
//! - The diagnostic type and its seven kinds
//! - Human-readable messages and suggestions
//! - The ordered sink a scan appends to

pub mod errors;

#[cfg(test)]
mod tests;
