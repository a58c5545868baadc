use crate::{
    ast::declarations::{Function, Prototype},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        stream::CharStream,
        tokens::{Token, TokenKind},
    },
};

use super::{
    expr::{parse_expression, parse_expression_from},
    parser::Parser,
};

fn expect_keyword(token: &Token, kind: TokenKind) -> Result<(), Error> {
    if token.kind == kind {
        return Ok(());
    }

    Err(Error::new(
        ErrorImpl::ExpectedKeyword {
            keyword: kind.to_string(),
            found: token.to_string(),
        },
        token.span.start.clone(),
    ))
}

/// `name ( param* )` where `token` is the already-read name.
///
/// Commas between parameters are optional. A parameter name may appear only
/// once.
pub fn parse_prototype<I: CharStream>(
    parser: &mut Parser<I>,
    token: Token,
) -> Result<Prototype, Error> {
    if token.kind != TokenKind::Identifier {
        return Err(Error::new(
            ErrorImpl::ExpectedFunctionName {
                found: token.to_string(),
            },
            token.span.start,
        ));
    }
    let name = token.text;

    let open = parser.next_token()?;
    if !open.is_char('(') {
        return Err(Error::new(
            ErrorImpl::ExpectedOpenParen {
                name,
                found: open.to_string(),
            },
            open.span.start,
        ));
    }

    let mut parameters: Vec<String> = vec![];
    let mut next = parser.next_token()?;
    while !next.is_char(')') {
        if next.kind != TokenKind::Identifier {
            return Err(Error::new(
                ErrorImpl::ExpectedParameter {
                    found: next.to_string(),
                },
                next.span.start,
            ));
        }

        if parameters.contains(&next.text) {
            return Err(Error::new(
                ErrorImpl::DuplicateParameter {
                    function: name,
                    parameter: next.text,
                },
                next.span.start,
            ));
        }
        parameters.push(next.text);

        next = parser.next_token()?;
        if next.is_char(',') {
            next = parser.next_token()?;
        }
    }

    Ok(Prototype { name, parameters })
}

/// `def prototype body`
pub fn parse_definition<I: CharStream>(
    parser: &mut Parser<I>,
    token: Token,
) -> Result<Function, Error> {
    expect_keyword(&token, TokenKind::Def)?;

    let name = parser.next_token()?;
    let prototype = parse_prototype(parser, name)?;
    let body = parse_expression(parser)?;

    Ok(Function { prototype, body })
}

/// `extern prototype`
pub fn parse_extern<I: CharStream>(
    parser: &mut Parser<I>,
    token: Token,
) -> Result<Prototype, Error> {
    expect_keyword(&token, TokenKind::Extern)?;

    let name = parser.next_token()?;
    parse_prototype(parser, name)
}

/// A bare expression, wrapped in an anonymous function so every top-level
/// unit with a body has the same shape.
pub fn parse_top_level_expr<I: CharStream>(
    parser: &mut Parser<I>,
    token: Token,
) -> Result<Function, Error> {
    let body = parse_expression_from(parser, token)?;

    Ok(Function {
        prototype: Prototype::anonymous(),
        body,
    })
}
