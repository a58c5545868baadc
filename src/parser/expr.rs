use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        stream::CharStream,
        tokens::{Token, TokenKind},
    },
};

use super::parser::Parser;

/// Reads one token and parses a full expression starting from it.
pub fn parse_expression<I: CharStream>(parser: &mut Parser<I>) -> Result<Expr, Error> {
    let token = parser.next_token()?;
    parse_expression_from(parser, token)
}

/// Parses a full expression whose first token has already been read.
pub fn parse_expression_from<I: CharStream>(
    parser: &mut Parser<I>,
    token: Token,
) -> Result<Expr, Error> {
    let lhs = parse_primary(parser, token)?;
    let current = parser.next_token()?;

    parse_bin_op_rhs(parser, 0, current, lhs)
}

pub fn parse_primary<I: CharStream>(parser: &mut Parser<I>, token: Token) -> Result<Expr, Error> {
    match token.kind {
        TokenKind::Identifier => {
            let next = parser.next_token()?;

            if next.is_char('(') {
                parse_call_expr(parser, token)
            } else {
                parser.push_back(next);
                Ok(Expr::variable(token.text))
            }
        }
        TokenKind::Number => Ok(Expr::number(token.number)),
        TokenKind::Char('(') => parse_paren_expr(parser),
        _ => Err(Error::new(
            ErrorImpl::ExpectedPrimary {
                found: token.to_string(),
            },
            token.span.start,
        )),
    }
}

/// Parses the inside of `( ... )` after the opening paren. The parentheses
/// leave no node of their own.
pub fn parse_paren_expr<I: CharStream>(parser: &mut Parser<I>) -> Result<Expr, Error> {
    let expr = parse_expression(parser)?;

    let close = parser.next_token()?;
    if !close.is_char(')') {
        return Err(Error::new(
            ErrorImpl::ExpectedCloseParen {
                found: close.to_string(),
            },
            close.span.start,
        ));
    }

    Ok(expr)
}

/// Parses an argument list after `callee` and its `(` have been consumed,
/// through the closing `)`.
pub fn parse_call_expr<I: CharStream>(parser: &mut Parser<I>, callee: Token) -> Result<Expr, Error> {
    let mut args = vec![];

    let mut next = parser.next_token()?;
    if next.is_char(')') {
        return Ok(Expr::call(callee.text, args));
    }

    loop {
        args.push(parse_expression_from(parser, next)?);

        let delimiter = parser.next_token()?;
        match delimiter.kind {
            TokenKind::Char(')') => break,
            TokenKind::Char(',') => next = parser.next_token()?,
            _ => {
                return Err(Error::new(
                    ErrorImpl::ExpectedArgsDelimiter {
                        found: delimiter.to_string(),
                    },
                    delimiter.span.start,
                ))
            }
        }
    }

    Ok(Expr::call(callee.text, args))
}

/// Precedence climbing over `lhs (op primary)*`.
///
/// Folds operators of at least `min_precedence` into `lhs`. The first token
/// that does not qualify is pushed back, unconsumed, before returning.
pub fn parse_bin_op_rhs<I: CharStream>(
    parser: &mut Parser<I>,
    min_precedence: i32,
    mut current: Token,
    mut lhs: Expr,
) -> Result<Expr, Error> {
    loop {
        let precedence = parser.get_precedence(&current);
        let kind = current.kind;
        let operator = match kind {
            TokenKind::Char(operator) if precedence > 0 && precedence >= min_precedence => operator,
            _ => {
                parser.push_back(current);
                return Ok(lhs);
            }
        };

        let token = parser.next_token()?;
        let mut rhs = parse_primary(parser, token)?;

        let mut next = parser.next_token()?;
        if precedence < parser.get_precedence(&next) {
            rhs = parse_bin_op_rhs(parser, precedence + 1, next, rhs)?;
            next = parser.next_token()?;
        }

        lhs = Expr::binary(operator, lhs, rhs);
        current = next;
    }
}
