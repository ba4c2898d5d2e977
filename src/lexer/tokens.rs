use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Spelling to kind lookup for every keyword, operator and marker.
    ///
    /// Generic categories (identifier, numbers, strings) have no spelling here,
    /// so a source word such as `literal` stays an identifier.
    pub static ref TOKEN_CATALOG: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("program", TokenKind::Program);
        map.insert("var", TokenKind::Var);
        map.insert("to", TokenKind::To);
        map.insert("then", TokenKind::Then);
        map.insert("string", TokenKind::String);
        map.insert("real", TokenKind::Real);
        map.insert("read", TokenKind::Read);
        map.insert("procedure", TokenKind::Procedure);
        map.insert("print", TokenKind::Print);
        map.insert("integer", TokenKind::Integer);
        map.insert("if", TokenKind::If);
        map.insert("for", TokenKind::For);
        map.insert("end", TokenKind::End);
        map.insert("else", TokenKind::Else);
        map.insert("do", TokenKind::Do);
        map.insert("const", TokenKind::Const);
        map.insert("begin", TokenKind::Begin);
        map.insert(">=", TokenKind::GreaterEquals);
        map.insert(">", TokenKind::Greater);
        map.insert("=", TokenKind::Equals);
        map.insert("<>", TokenKind::NotEquals);
        map.insert("<=", TokenKind::LessEquals);
        map.insert("<", TokenKind::Less);
        map.insert("+", TokenKind::Plus);
        map.insert(";", TokenKind::Semicolon);
        map.insert(":=", TokenKind::Assignment);
        map.insert(":", TokenKind::Colon);
        map.insert("/", TokenKind::Slash);
        map.insert(".", TokenKind::Dot);
        map.insert(",", TokenKind::Comma);
        map.insert("*", TokenKind::Star);
        map.insert(")", TokenKind::CloseParen);
        map.insert("(", TokenKind::OpenParen);
        map.insert("{", TokenKind::OpenCurly);
        map.insert("}", TokenKind::CloseCurly);
        map.insert("-", TokenKind::Dash);
        map.insert("*-*", TokenKind::LineComment);
        map.insert("(;", TokenKind::BlockCommentOpen);
        map.insert(";)", TokenKind::BlockCommentClose);
        map.insert("\"", TokenKind::Quote);
        map
    };
}

/// Exact-spelling lookup. `None` is the normal answer for numbers, strings
/// and plain identifiers.
pub fn lookup(spelling: &str) -> Option<TokenKind> {
    TOKEN_CATALOG.get(spelling).copied()
}

/// Lexical category of a token. The discriminant is the stable numeric code
/// handed to downstream consumers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Reserved
    Var = 2,
    To = 3,
    Then = 4,
    String = 5,
    Real = 6,
    Read = 7,
    Program = 8,
    Procedure = 9,
    Print = 10,
    Integer = 14,
    If = 15,
    For = 17,
    End = 18,
    Else = 19,
    Do = 20,
    Const = 21,
    Begin = 22,

    // Generic categories
    RealNumber = 11,
    IntegerNumber = 12,
    Literal = 13,   // "..."
    Identifier = 16,
    VString = 23,   // '...'

    GreaterEquals = 24,
    Greater = 25,
    Equals = 26,
    NotEquals = 27, // <>
    LessEquals = 28,
    Less = 29,
    Plus = 30,
    Semicolon = 31,
    Assignment = 32, // :=
    Colon = 33,
    Slash = 34,
    Dot = 35,
    Comma = 36,
    Star = 37,
    CloseParen = 38,
    OpenParen = 39,
    OpenCurly = 40,
    CloseCurly = 41,
    Dash = 42,

    // Comment and quote markers, catalogued but never emitted as tokens
    LineComment = 43,
    BlockCommentOpen = 44,
    BlockCommentClose = 45,
    Quote = 46,
}

impl TokenKind {
    /// Every kind in ascending code order.
    pub const ALL: [TokenKind; 45] = [
        TokenKind::Var,
        TokenKind::To,
        TokenKind::Then,
        TokenKind::String,
        TokenKind::Real,
        TokenKind::Read,
        TokenKind::Program,
        TokenKind::Procedure,
        TokenKind::Print,
        TokenKind::RealNumber,
        TokenKind::IntegerNumber,
        TokenKind::Literal,
        TokenKind::Integer,
        TokenKind::If,
        TokenKind::Identifier,
        TokenKind::For,
        TokenKind::End,
        TokenKind::Else,
        TokenKind::Do,
        TokenKind::Const,
        TokenKind::Begin,
        TokenKind::VString,
        TokenKind::GreaterEquals,
        TokenKind::Greater,
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::LessEquals,
        TokenKind::Less,
        TokenKind::Plus,
        TokenKind::Semicolon,
        TokenKind::Assignment,
        TokenKind::Colon,
        TokenKind::Slash,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::Star,
        TokenKind::CloseParen,
        TokenKind::OpenParen,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::Dash,
        TokenKind::LineComment,
        TokenKind::BlockCommentOpen,
        TokenKind::BlockCommentClose,
        TokenKind::Quote,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<TokenKind> {
        TokenKind::ALL.iter().copied().find(|kind| kind.code() == code)
    }

    /// True for the categories assigned when no exact spelling matched.
    pub fn is_generic(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::IntegerNumber
                | TokenKind::RealNumber
                | TokenKind::Literal
                | TokenKind::VString
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based source line.
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}` (line {})", self.kind, self.lexeme, self.line)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{lookup, TokenKind, TOKEN_CATALOG};

    #[test]
    fn test_codes_are_unique_and_round_trip() {
        let codes: HashSet<u8> = TokenKind::ALL.iter().map(|kind| kind.code()).collect();
        assert_eq!(codes.len(), TokenKind::ALL.len());

        for kind in TokenKind::ALL {
            assert_eq!(TokenKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(TokenKind::from_code(1), None);
        assert_eq!(TokenKind::from_code(47), None);
    }

    #[test]
    fn test_all_is_sorted_by_code() {
        let codes: Vec<u8> = TokenKind::ALL.iter().map(|kind| kind.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_lookup_keywords_and_operators() {
        assert_eq!(lookup("program"), Some(TokenKind::Program));
        assert_eq!(lookup("integer"), Some(TokenKind::Integer));
        assert_eq!(lookup(":="), Some(TokenKind::Assignment));
        assert_eq!(lookup("<>"), Some(TokenKind::NotEquals));
        assert_eq!(lookup("("), Some(TokenKind::OpenParen));
        assert_eq!(lookup(")"), Some(TokenKind::CloseParen));
        assert_eq!(TokenKind::Integer.code(), 14);
        assert_eq!(TokenKind::Identifier.code(), 16);
    }

    #[test]
    fn test_lookup_absent_for_generic_spellings() {
        assert_eq!(lookup("x"), None);
        assert_eq!(lookup("42"), None);
        assert_eq!(lookup("literal"), None);
        assert_eq!(lookup("vstring"), None);
        assert_eq!(lookup("ident"), None);
        assert_eq!(lookup("Program"), None);
    }

    #[test]
    fn test_catalog_never_maps_to_generic_kind() {
        assert!(TOKEN_CATALOG.values().all(|kind| !kind.is_generic()));
    }
}
