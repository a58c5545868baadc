//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs including:
//! - Primary expressions (numbers, variables, calls, parentheses)
//! - Operator precedence and associativity
//! - Prototypes, definitions and externs
//! - The top-level driver loop
//! - Error cases

use crate::{
    ast::{
        declarations::{Function, Prototype, TopLevel},
        expressions::Expr,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    expr::parse_expression,
    lookups::{PrecedenceTable, NO_PRECEDENCE},
    parser::{parse, parse_with_config, ErrorPolicy, Parser, ParserConfig},
};

fn expr(source: &str) -> Expr {
    let mut parser = Parser::from_source(source, Some("test.ks".to_string()));
    parse_expression(&mut parser).unwrap()
}

fn expr_error(source: &str) -> Error {
    let mut parser = Parser::from_source(source, Some("test.ks".to_string()));
    parse_expression(&mut parser).unwrap_err()
}

fn token(kind: TokenKind) -> Token {
    Token {
        kind,
        text: String::new(),
        number: f64::NAN,
        span: Span {
            start: Position::null(),
            end: Position::null(),
        },
    }
}

#[test]
fn test_parse_variable_expression() {
    for name in ["x", "abcd", "foo42"] {
        assert_eq!(expr(name), Expr::variable(name));
    }
}

#[test]
fn test_parse_number_expression() {
    assert_eq!(expr("123"), Expr::number(123.0));
    assert_eq!(expr("123.5"), Expr::number(123.5));
    assert_eq!(expr("100"), Expr::number(100.0));
}

#[test]
fn test_parentheses_are_transparent() {
    for source in ["x", "42", "a+b*c", "f(a, b)", "(a)"] {
        assert_eq!(expr(&format!("({})", source)), expr(source));
    }
    assert_eq!(expr("((((x))))"), Expr::variable("x"));
}

#[test]
fn test_parse_call_expression() {
    assert_eq!(
        expr("f(a,b)"),
        Expr::call("f", vec![Expr::variable("a"), Expr::variable("b")])
    );
}

#[test]
fn test_parse_zero_argument_call() {
    assert_eq!(expr("f()"), Expr::call("f", vec![]));
}

#[test]
fn test_call_arguments_are_full_expressions() {
    assert_eq!(
        expr("f(a+1, g(b), (c))"),
        Expr::call(
            "f",
            vec![
                Expr::binary('+', Expr::variable("a"), Expr::number(1.0)),
                Expr::call("g", vec![Expr::variable("b")]),
                Expr::variable("c"),
            ]
        )
    );
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(
        expr("a+b*c"),
        Expr::binary(
            '+',
            Expr::variable("a"),
            Expr::binary('*', Expr::variable("b"), Expr::variable("c"))
        )
    );
    assert_eq!(
        expr("a*b+c"),
        Expr::binary(
            '+',
            Expr::binary('*', Expr::variable("a"), Expr::variable("b")),
            Expr::variable("c")
        )
    );
}

#[test]
fn test_equal_precedence_is_left_associative() {
    assert_eq!(expr("a-b-c").to_string(), "((a - b) - c)");
    assert_eq!(expr("a/b*c").to_string(), "((a / b) * c)");
    assert_eq!(expr("a<b>c").to_string(), "((a < b) > c)");
}

#[test]
fn test_mixed_precedence_chains() {
    assert_eq!(expr("a+b*c-d").to_string(), "((a + (b * c)) - d)");
    assert_eq!(expr("a<b+c*d").to_string(), "(a < (b + (c * d)))");
    assert_eq!(expr("a*b<c-d/e").to_string(), "((a * b) < (c - (d / e)))");
    assert_eq!(expr("a+b*c*d+e").to_string(), "((a + ((b * c) * d)) + e)");
    assert_eq!(expr("(a+b)*c").to_string(), "((a + b) * c)");
}

#[test]
fn test_expression_stops_at_unknown_operator() {
    let mut parser = Parser::from_source("a+b @ c", None);

    assert_eq!(parse_expression(&mut parser).unwrap().to_string(), "(a + b)");
    assert_eq!(parser.next_token().unwrap().kind, TokenKind::Char('@'));
}

#[test]
fn test_operator_precedence_table() {
    let table = PrecedenceTable::default();

    assert_eq!(table.get_precedence(&token(TokenKind::Char('<'))), 10);
    assert_eq!(table.get_precedence(&token(TokenKind::Char('>'))), 10);
    assert_eq!(table.get_precedence(&token(TokenKind::Char('+'))), 20);
    assert_eq!(table.get_precedence(&token(TokenKind::Char('-'))), 20);
    assert_eq!(table.get_precedence(&token(TokenKind::Char('*'))), 40);
    assert_eq!(table.get_precedence(&token(TokenKind::Char('/'))), 40);
    assert!(
        table.get_precedence(&token(TokenKind::Char('*')))
            > table.get_precedence(&token(TokenKind::Char('+')))
    );
}

#[test]
fn test_no_precedence_for_non_operators() {
    let table = PrecedenceTable::default();

    assert_eq!(table.get_precedence(&token(TokenKind::Def)), NO_PRECEDENCE);
    assert_eq!(table.get_precedence(&token(TokenKind::EOF)), NO_PRECEDENCE);
    assert_eq!(table.get_precedence(&token(TokenKind::Identifier)), NO_PRECEDENCE);
    assert_eq!(table.get_precedence(&token(TokenKind::Char('d'))), NO_PRECEDENCE);
    assert_eq!(table.get_precedence(&token(TokenKind::Char(')'))), NO_PRECEDENCE);
    assert_eq!(table.get_precedence(&token(TokenKind::Char('é'))), NO_PRECEDENCE);
    assert_eq!(NO_PRECEDENCE, -1);
}

#[test]
fn test_custom_precedence_table() {
    let table = PrecedenceTable::default()
        .with_operator('+', 50)
        .with_operator('%', 40)
        .with_operator('é', 60)
        .with_operator('-', 0);

    assert_eq!(table.get_precedence(&token(TokenKind::Char('+'))), 50);
    assert_eq!(table.get_precedence(&token(TokenKind::Char('%'))), 40);
    assert_eq!(table.get_precedence(&token(TokenKind::Char('é'))), NO_PRECEDENCE);
    assert_eq!(table.get_precedence(&token(TokenKind::Char('-'))), NO_PRECEDENCE);

    // The default table is unaffected.
    assert_eq!(
        PrecedenceTable::default().get_precedence(&token(TokenKind::Char('+'))),
        20
    );
}

#[test]
fn test_parsers_use_their_own_precedence() {
    let table = PrecedenceTable::default().with_operator('+', 50);
    let mut parser = Parser::new(Lexer::from_source("a+b*c", None), table);

    assert_eq!(parse_expression(&mut parser).unwrap().to_string(), "((a + b) * c)");
    assert_eq!(expr("a+b*c").to_string(), "(a + (b * c))");
}

#[test]
fn test_empty_precedence_table_disables_binary_operators() {
    let mut parser = Parser::new(Lexer::from_source("a+b", None), PrecedenceTable::empty());

    assert_eq!(parse_expression(&mut parser).unwrap(), Expr::variable("a"));
    assert_eq!(parser.next_token().unwrap().kind, TokenKind::Char('+'));
}

#[test]
fn test_pushback_returns_token_again() {
    let mut parser = Parser::from_source("a b", None);

    let a = parser.next_token().unwrap();
    assert_eq!(a.text, "a");
    parser.push_back(a);

    assert_eq!(parser.next_token().unwrap().text, "a");
    assert_eq!(parser.next_token().unwrap().text, "b");
    assert_eq!(parser.next_token().unwrap().kind, TokenKind::EOF);
    assert_eq!(parser.next_token().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_unterminated_call_fails() {
    let error = expr_error("abcd(");

    assert!(matches!(error.get_kind(), ErrorImpl::ExpectedPrimary { .. }));
}

#[test]
fn test_unterminated_argument_list_fails() {
    let error = expr_error("f(a");

    assert_eq!(
        *error.get_kind(),
        ErrorImpl::ExpectedArgsDelimiter {
            found: "end of input".to_string()
        }
    );
}

#[test]
fn test_malformed_argument_list_fails() {
    let error = expr_error("f(a b)");

    assert_eq!(
        *error.get_kind(),
        ErrorImpl::ExpectedArgsDelimiter {
            found: "identifier `b`".to_string()
        }
    );
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_trailing_comma_in_arguments_fails() {
    let error = expr_error("f(a,)");

    assert!(matches!(error.get_kind(), ErrorImpl::ExpectedPrimary { .. }));
}

#[test]
fn test_missing_close_paren_fails() {
    let error = expr_error("(a+b");

    assert_eq!(
        *error.get_kind(),
        ErrorImpl::ExpectedCloseParen {
            found: "end of input".to_string()
        }
    );

    let error = expr_error("(a b)");
    assert!(matches!(error.get_kind(), ErrorImpl::ExpectedCloseParen { .. }));
}

#[test]
fn test_missing_primary_fails() {
    for source in [")", ";", "def", "+1", "a+", "a*(", ""] {
        let error = expr_error(source);
        assert_eq!(error.get_error_name(), "ExpectedPrimary", "source: {:?}", source);
    }
}

#[test]
fn test_parse_prototype_via_extern() {
    let units = parse("extern sin(x)", None).unwrap();

    assert_eq!(
        units,
        vec![TopLevel::Extern(Prototype {
            name: "sin".to_string(),
            parameters: vec!["x".to_string()],
        })]
    );
}

#[test]
fn test_prototype_commas_are_optional() {
    let with_commas = parse("extern f(a, b, c)", None).unwrap();
    let without_commas = parse("extern f(a b c)", None).unwrap();

    assert_eq!(with_commas, without_commas);
    assert_eq!(with_commas[0].to_string(), "extern f(a, b, c)");
}

#[test]
fn test_prototype_without_parameters() {
    let units = parse("extern rand()", None).unwrap();

    assert_eq!(
        units,
        vec![TopLevel::Extern(Prototype {
            name: "rand".to_string(),
            parameters: vec![],
        })]
    );
}

#[test]
fn test_prototype_errors() {
    let cases = [
        ("extern 42(x)", "ExpectedFunctionName"),
        ("extern f x", "ExpectedOpenParen"),
        ("extern f", "ExpectedOpenParen"),
        ("extern f(1)", "ExpectedParameter"),
        ("extern f(a + b)", "ExpectedParameter"),
        ("extern f(a", "ExpectedParameter"),
        ("extern f(a, a)", "DuplicateParameter"),
        ("def f(x y x) x", "DuplicateParameter"),
    ];

    for (source, name) in cases {
        let error = parse(source, None).unwrap_err();
        assert_eq!(error.get_error_name(), name, "source: {:?}", source);
    }
}

#[test]
fn test_duplicate_parameter_error_names_both() {
    let error = parse("def add(x, x) x + x", None).unwrap_err();

    assert_eq!(
        *error.get_kind(),
        ErrorImpl::DuplicateParameter {
            function: "add".to_string(),
            parameter: "x".to_string(),
        }
    );
}

#[test]
fn test_parse_definition() {
    let units = parse("def add(a b) a + b", None).unwrap();

    assert_eq!(
        units,
        vec![TopLevel::Definition(Function {
            prototype: Prototype {
                name: "add".to_string(),
                parameters: vec!["a".to_string(), "b".to_string()],
            },
            body: Expr::binary('+', Expr::variable("a"), Expr::variable("b")),
        })]
    );
}

#[test]
fn test_definition_without_body_fails() {
    let error = parse("def f(x)", None).unwrap_err();

    assert!(matches!(error.get_kind(), ErrorImpl::ExpectedPrimary { .. }));
}

#[test]
fn test_parse_top_level_expression() {
    let units = parse("4 + 5", None).unwrap();

    match &units[0] {
        TopLevel::Expression(function) => {
            assert!(function.prototype.is_anonymous());
            assert!(function.prototype.parameters.is_empty());
            assert_eq!(function.body.to_string(), "(4 + 5)");
        }
        other => panic!("Expected top-level expression, got {:?}", other),
    }
}

#[test]
fn test_semicolons_are_skipped() {
    let units = parse(";;; x ; ; y ;", None).unwrap();

    assert_eq!(units.len(), 2);
    assert_eq!(units[0].to_string(), "x");
    assert_eq!(units[1].to_string(), "y");
}

#[test]
fn test_parse_empty_program() {
    assert!(parse("", None).unwrap().is_empty());
    assert!(parse("  # only a comment\n", None).unwrap().is_empty());
}

#[test]
fn test_parse_mixed_program() {
    let source = "
        # Compute things
        extern cos(x);
        def square(x) x * x;
        def hyp(a b) square(a) + square(b);
        hyp(3, 4) < 6;
    ";
    let units = parse(source, None).unwrap();

    assert_eq!(units.len(), 4);
    assert_eq!(units[0].to_string(), "extern cos(x)");
    assert_eq!(units[1].to_string(), "def square(x) (x * x)");
    assert_eq!(units[2].to_string(), "def hyp(a, b) (square(a) + square(b))");
    assert_eq!(units[3].to_string(), "(hyp(3, 4) < 6)");
}

#[test]
fn test_adjacent_expressions_are_separate_units() {
    let units = parse("x y", None).unwrap();

    assert_eq!(units.len(), 2);
}

#[test]
fn test_parser_iterator_ends_at_eof() {
    let mut parser = Parser::from_source("def f() 1 f()", None);

    assert!(matches!(parser.next(), Some(Ok(TopLevel::Definition(_)))));
    assert!(matches!(parser.next(), Some(Ok(TopLevel::Expression(_)))));
    assert!(parser.next().is_none());
    assert!(parser.next().is_none());
}

#[test]
fn test_halt_policy_stops_at_first_error() {
    let config = ParserConfig {
        error_policy: ErrorPolicy::Halt,
        ..ParserConfig::default()
    };
    let (units, errors) = parse_with_config("a; f(a b); c; )", None, config);

    assert_eq!(units.len(), 1);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "ExpectedArgsDelimiter");
}

#[test]
fn test_continue_policy_resumes_after_error() {
    let (units, errors) = parse_with_config("a; f(a b; c; )", None, ParserConfig::default());

    // `b` is consumed by the failing call, so parsing resumes at `;`.
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].get_error_name(), "ExpectedArgsDelimiter");
    assert_eq!(errors[1].get_error_name(), "ExpectedPrimary");
    assert_eq!(units.len(), 2);
    assert_eq!(units[0].to_string(), "a");
    assert_eq!(units[1].to_string(), "c");
}

#[test]
fn test_lexer_error_is_reported_by_parser() {
    let error = parse("def f(x) x + 1.2.3", None).unwrap_err();

    assert_eq!(
        *error.get_kind(),
        ErrorImpl::NumberParseError {
            token: "1.2.3".to_string()
        }
    );
    assert_eq!(error.get_position().0, 13);
}

#[test]
fn test_definition_keyword_is_checked() {
    let mut parser = Parser::from_source("extern f()", None);
    let token = parser.next_token().unwrap();

    let error = super::decl::parse_definition(&mut parser, token).unwrap_err();
    assert_eq!(
        *error.get_kind(),
        ErrorImpl::ExpectedKeyword {
            keyword: "def".to_string(),
            found: "extern".to_string(),
        }
    );
}
