use crate::{
    ast::declarations::{Function, Prototype},
    errors::errors::ParseError,
    lexer::tokens::Token,
};

use super::{expr::parse_expression, parser::Parser};

/// Parses `identifier '(' identifier* ')'`.
///
/// Parameter names have no separators between them in this grammar.
pub fn parse_prototype<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
) -> Result<Prototype, ParseError> {
    let name = match parser.current_token() {
        Token::Identifier(name) => name.clone(),
        token => {
            return Err(ParseError::ExpectedFunctionName {
                found: token.to_string(),
            })
        }
    };
    parser.advance();

    if *parser.current_token() != Token::Char('(') {
        return Err(ParseError::ExpectedPrototypeOpen {
            found: parser.current_token().to_string(),
        });
    }
    parser.advance();

    let mut params = vec![];

    while let Token::Identifier(param) = parser.current_token() {
        params.push(param.clone());
        parser.advance();
    }

    if *parser.current_token() != Token::Char(')') {
        return Err(ParseError::ExpectedPrototypeClose {
            found: parser.current_token().to_string(),
        });
    }
    parser.advance();

    Ok(Prototype::new(name, params))
}

/// Parses `'def' prototype expression`.
///
/// The body is always a single expression; there is no block syntax.
pub fn parse_definition<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
) -> Result<Function, ParseError> {
    parser.advance();

    let prototype = parse_prototype(parser)?;
    let body = parse_expression(parser)?;

    Ok(Function { prototype, body })
}

/// Parses `'extern' prototype`, yielding a bare prototype with no body.
pub fn parse_extern<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
) -> Result<Prototype, ParseError> {
    parser.advance();
    parse_prototype(parser)
}

/// Parses one bare expression and wraps it in an anonymous, zero-param
/// function so free-standing expressions look like declared functions to
/// the downstream consumer.
pub fn parse_top_level_expr<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
) -> Result<Function, ParseError> {
    let body = parse_expression(parser)?;

    Ok(Function {
        prototype: Prototype::anonymous(),
        body,
    })
}
