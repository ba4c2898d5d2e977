//! Unit tests for diagnostics and the diagnostic sink.

use crate::errors::errors::{Diagnostic, DiagnosticImpl, DiagnosticKind, DiagnosticSink, DiagnosticTip};

#[test]
fn test_diagnostic_creation() {
    let diagnostic = Diagnostic::new(DiagnosticImpl::UnknownCharacter { character: '@' }, 10);

    assert_eq!(diagnostic.get_error_name(), "UnknownCharacter");
    assert_eq!(diagnostic.kind(), DiagnosticKind::UnknownCharacter);
    assert_eq!(diagnostic.get_line(), 10);
}

#[test]
fn test_diagnostic_names_match_kinds() {
    let cases = vec![
        (DiagnosticImpl::IntegerOutOfRange { lexeme: "30000".to_string() }, "IntegerOutOfRange"),
        (DiagnosticImpl::RealMalformed { lexeme: "1.234".to_string() }, "RealMalformed"),
        (DiagnosticImpl::RealOutOfRange { lexeme: "20000.5".to_string() }, "RealOutOfRange"),
        (
            DiagnosticImpl::StringTooLong { lexeme: "'...'".to_string(), length: 51 },
            "StringTooLong",
        ),
        (DiagnosticImpl::LiteralMalformed { lexeme: "\"x".to_string() }, "LiteralMalformed"),
        (DiagnosticImpl::IdentifierInvalid { lexeme: "x1".to_string() }, "IdentifierInvalid"),
    ];

    for (error_impl, name) in cases {
        let diagnostic = Diagnostic::new(error_impl, 1);
        assert_eq!(diagnostic.get_error_name(), name);
        assert_eq!(format!("{:?}", diagnostic.kind()), name);
    }
}

#[test]
fn test_diagnostic_messages() {
    let diagnostic = Diagnostic::new(
        DiagnosticImpl::IntegerOutOfRange {
            lexeme: "20001".to_string(),
        },
        4,
    );

    assert_eq!(diagnostic.message(), "integer 20001 out of range (0-20000)");
    assert_eq!(diagnostic.to_string(), "line 4: integer 20001 out of range (0-20000)");

    let diagnostic = Diagnostic::new(
        DiagnosticImpl::StringTooLong {
            lexeme: String::new(),
            length: 51,
        },
        2,
    );
    assert_eq!(diagnostic.message(), "string longer than 50 characters (51)");
}

#[test]
fn test_diagnostic_tip_none() {
    let diagnostic = Diagnostic::new(DiagnosticImpl::UnknownCharacter { character: '#' }, 1);

    assert!(matches!(diagnostic.get_tip(), DiagnosticTip::None));
}

#[test]
fn test_diagnostic_tip_suggestion() {
    let diagnostic = Diagnostic::new(
        DiagnosticImpl::StringTooLong {
            lexeme: String::new(),
            length: 53,
        },
        1,
    );

    match diagnostic.get_tip() {
        DiagnosticTip::Suggestion(tip) => assert_eq!(tip, "Shorten the string by 3 characters"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_diagnostic_tip_display() {
    let tip = DiagnosticTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = DiagnosticTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_sink_keeps_insertion_order() {
    let mut sink = DiagnosticSink::new();
    assert!(sink.is_empty());

    sink.push(Diagnostic::new(DiagnosticImpl::UnknownCharacter { character: '$' }, 3));
    sink.push(Diagnostic::new(
        DiagnosticImpl::IdentifierInvalid {
            lexeme: "a1".to_string(),
        },
        1,
    ));

    assert_eq!(sink.len(), 2);
    let lines: Vec<usize> = sink.iter().map(|diagnostic| diagnostic.get_line()).collect();
    assert_eq!(lines, vec![3, 1]);

    let diagnostics = sink.into_inner();
    assert_eq!(diagnostics[0].kind(), DiagnosticKind::UnknownCharacter);
    assert_eq!(diagnostics[1].kind(), DiagnosticKind::IdentifierInvalid);
}
