use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Diagnostic, DiagnosticImpl, DiagnosticSink},
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::{
    tokens::{lookup, Token, TokenKind},
    validator::validate,
};

pub type RuleHandler = fn(&mut Lexer, &str);

/// One entry of the rule table: a pattern anchored at the cursor and the
/// handler run on the matched text.
pub struct Rule {
    name: &'static str,
    regex: Regex,
    kind_hint: Option<TokenKind>,
    handler: RuleHandler,
}

impl Rule {
    fn new(
        name: &'static str,
        pattern: &str,
        kind_hint: Option<TokenKind>,
        handler: RuleHandler,
    ) -> Rule {
        Rule {
            name,
            regex: Regex::new(&format!("^(?:{})", pattern)).expect("rule pattern must compile"),
            kind_hint,
            handler,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Fixed kind for the match, or `None` when the kind is resolved through
    /// the catalog (operators) or no token is produced (comments, whitespace).
    pub fn kind_hint(&self) -> Option<TokenKind> {
        self.kind_hint
    }

    /// Length of the match starting exactly at the beginning of `remainder`.
    pub fn match_len(&self, remainder: &str) -> Option<usize> {
        self.regex.find(remainder).map(|found| found.end())
    }
}

lazy_static! {
    /// Rules in priority order. The first rule matching at the cursor wins,
    /// even when a later rule would consume more text.
    pub static ref RULE_TABLE: Vec<Rule> = vec![
        Rule::new("line_comment", r"\*-\*.*", None, skip_handler),
        Rule::new("block_comment", r"\(;.*?;\)", None, skip_handler),
        Rule::new("literal", r#""[^"]*""#, Some(TokenKind::Literal), MK_DEFAULT_HANDLER!(TokenKind::Literal)),
        Rule::new("vstring", r"'[^']*'", Some(TokenKind::VString), MK_DEFAULT_HANDLER!(TokenKind::VString)),
        Rule::new("identifier", r"[a-zA-Z]{1,10}", Some(TokenKind::Identifier), symbol_handler),
        Rule::new("real", r"[0-9]+\.[0-9]{1,2}", Some(TokenKind::RealNumber), MK_DEFAULT_HANDLER!(TokenKind::RealNumber)),
        Rule::new("integer", r"[0-9]+", Some(TokenKind::IntegerNumber), MK_DEFAULT_HANDLER!(TokenKind::IntegerNumber)),
        Rule::new("operator", r">=|<=|<>|:=|[+\-*/=<>;:.,(){}]", None, operator_handler),
        Rule::new("whitespace", r"\s+", None, skip_handler),
    ];
}

/// Scan state for a single `tokenize` call.
pub struct Lexer {
    tokens: Vec<Token>,
    diagnostics: DiagnosticSink,
    line: usize,
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer {
            tokens: vec![],
            diagnostics: DiagnosticSink::new(),
            line: 0,
        }
    }

    /// Builds a token for the current line, validates it and keeps it.
    pub fn emit(&mut self, kind: TokenKind, lexeme: &str) {
        let token = MK_TOKEN!(kind, String::from(lexeme), self.line);
        tracing::trace!(line = token.line, code = kind.code(), lexeme, "token");

        if let Some(diagnostic) = validate(&token) {
            self.diagnostics.push(diagnostic);
        }
        self.tokens.push(token);
    }

    pub fn scan_line(&mut self, text: &str, line: usize) {
        self.line = line;
        let emitted_before = self.tokens.len();
        let mut pos = 0;

        while pos < text.len() {
            let remainder = &text[pos..];
            let accepted = RULE_TABLE
                .iter()
                .find_map(|rule| rule.match_len(remainder).map(|len| (rule, len)));

            match accepted {
                Some((rule, len)) => {
                    (rule.handler)(self, &remainder[..len]);
                    pos += len;
                }
                None => {
                    let Some(character) = remainder.chars().next() else {
                        break;
                    };
                    self.diagnostics.push(Diagnostic::new(
                        DiagnosticImpl::UnknownCharacter { character },
                        line,
                    ));
                    pos += character.len_utf8();
                }
            }
        }

        tracing::debug!(line, tokens = self.tokens.len() - emitted_before, "scanned line");
    }

    pub fn finish(self) -> (Vec<Token>, Vec<Diagnostic>) {
        (self.tokens, self.diagnostics.into_inner())
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

fn skip_handler(_lexer: &mut Lexer, _lexeme: &str) {}

fn symbol_handler(lexer: &mut Lexer, lexeme: &str) {
    let kind = lookup(lexeme).unwrap_or(TokenKind::Identifier);
    lexer.emit(kind, lexeme);
}

fn operator_handler(lexer: &mut Lexer, lexeme: &str) {
    // every spelling the operator rule can match is catalogued
    if let Some(kind) = lookup(lexeme) {
        lexer.emit(kind, lexeme);
    }
}

/// Scans `source` line by line and returns the tokens and diagnostics, both in
/// scan order. Never fails: malformed input only produces diagnostics.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut lex = Lexer::new();

    for (index, text) in source.lines().enumerate() {
        lex.scan_line(text, index + 1);
    }

    lex.finish()
}
