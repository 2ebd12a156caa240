use declint::analyzer::{analyze, analyze_with_budget, repair, tokenize};
use declint::diagnostics::Diagnostic;
use declint::lexer::{Token, TokenKind};
use declint::machine;

/// End-to-end runs of the scan-and-repair pipeline over literal sources.

#[test]
fn test_valid_declaration_passes_untouched() {
    let analysis = analyze("const int x = 5;");

    assert_eq!(
        vec![
            Token::new(TokenKind::Const, "const", 1, 1),
            Token::new(TokenKind::Int, "int", 1, 7),
            Token::new(TokenKind::Variable, "x", 1, 11),
            Token::new(TokenKind::Equal, "=", 1, 13),
            Token::new(TokenKind::Value, "5", 1, 15),
            Token::new(TokenKind::Semicolon, ";", 1, 16),
        ],
        analysis.tokens
    );
    assert!(analysis.errors.is_empty());
}

#[test]
fn test_constexpr_with_signed_value() {
    let analysis = analyze("constexpr int y = -12;");

    assert_eq!(
        vec![
            Token::new(TokenKind::Constexpr, "constexpr", 1, 1),
            Token::new(TokenKind::Int, "int", 1, 11),
            Token::new(TokenKind::Variable, "y", 1, 15),
            Token::new(TokenKind::Equal, "=", 1, 17),
            Token::new(TokenKind::Minus, "-", 1, 19),
            Token::new(TokenKind::Value, "12", 1, 20),
            Token::new(TokenKind::Semicolon, ";", 1, 22),
        ],
        analysis.tokens
    );
    assert!(analysis.errors.is_empty());
}

#[test]
fn test_missing_semicolon() {
    let analysis = analyze("const int z = 7");

    assert_eq!(
        vec![Diagnostic::new(1, 16, "Insert missing token: ';'")],
        analysis.errors
    );
    assert_eq!(
        Token::new(TokenKind::Semicolon, ";", 1, 16),
        analysis.tokens[5]
    );
    assert!(machine::accepts(&analysis.tokens));
}

#[test]
fn test_missing_data_type() {
    let analysis = analyze("const x = 5;");

    assert_eq!(
        vec![Diagnostic::new(1, 7, "Insert missing token: 'int'")],
        analysis.errors
    );
    assert_eq!(TokenKind::Int, analysis.tokens[1].kind);
    assert!(machine::accepts(&analysis.tokens));
}

#[test]
fn test_missing_identifier() {
    let analysis = analyze("const int = 5;");

    assert_eq!(
        vec![Diagnostic::new(1, 11, "Insert missing token: 'variable_name'")],
        analysis.errors
    );
    assert_eq!(
        Token::new(TokenKind::Variable, "variable_name", 1, 11),
        analysis.tokens[2]
    );
    assert!(machine::accepts(&analysis.tokens));
}

#[test]
fn test_spurious_leading_data_type() {
    let analysis = analyze("int int x = 5;");

    // any single edit is optimal here; the repaired stream must walk through
    assert_eq!(1, analysis.errors.len());
    assert!(machine::accepts(&analysis.tokens));
}

#[test]
fn test_two_declarations_in_one_source() {
    let analysis = analyze("const int a = 1;\nconstexpr int b = +2;");

    assert!(analysis.errors.is_empty());
    assert_eq!(13, analysis.tokens.len());
    assert_eq!(
        Token::new(TokenKind::Constexpr, "constexpr", 2, 1),
        analysis.tokens[6]
    );
}

#[test]
fn test_empty_input() {
    let analysis = analyze("");

    assert!(analysis.tokens.is_empty());
    assert!(analysis.errors.is_empty());
}

#[test]
fn test_blank_input() {
    let analysis = analyze(" \n\t \n ");

    assert!(analysis.tokens.is_empty());
    assert!(analysis.errors.is_empty());
}

#[test]
fn test_lone_invalid_character() {
    let analysis = analyze("@");

    assert!(analysis.tokens.is_empty());
    assert_eq!(
        vec![Diagnostic::new(1, 1, "Unexpected character: @")],
        analysis.errors
    );
}

#[test]
fn test_scan_errors_precede_repair_edits() {
    let analysis = analyze("const $ int x = 5");

    assert_eq!(
        vec![
            Diagnostic::new(1, 7, "Unexpected character: $"),
            Diagnostic::new(1, 18, "Insert missing token: ';'"),
        ],
        analysis.errors
    );
}

#[test]
fn test_budget_exhaustion_keeps_tokens() {
    let analysis = analyze_with_budget("= = = =", 1);

    assert_eq!(
        vec![Diagnostic::new(0, 0, "Edit budget exceeded (1)")],
        analysis.errors
    );
    assert_eq!(4, analysis.tokens.len());
}

#[test]
fn test_facade_pieces_compose_like_analyze() {
    let input = "constexpr int n = +7";

    let (tokens, scan_errors) = tokenize(input);
    let (repaired, edits) = repair(tokens);

    let analysis = analyze(input);
    assert_eq!(analysis.tokens, repaired);
    assert_eq!(
        analysis.errors,
        scan_errors.into_iter().chain(edits).collect::<Vec<_>>()
    );
}
