use crate::{ast::expressions::Expr, errors::errors::ParseError, lexer::tokens::Token};

use super::parser::Parser;

/// Parses one full expression: a primary followed by any number of
/// binary-operator extensions, resolved by precedence climbing.
pub fn parse_expression<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
) -> Result<Expr, ParseError> {
    let lhs = parse_primary(parser)?;
    parse_binop_rhs(parser, 0, lhs)
}

/// Dispatches on the lookahead to one of the primary forms.
///
/// On failure the offending token is left in the lookahead unconsumed.
pub fn parse_primary<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Expr, ParseError> {
    match parser.current_token() {
        Token::Number(_) => parse_number_expr(parser),
        Token::Identifier(_) => parse_identifier_expr(parser),
        Token::Char('(') => parse_paren_expr(parser),
        Token::If => parse_conditional_expr(parser),
        token => Err(ParseError::ExpectedExpression {
            found: token.to_string(),
        }),
    }
}

pub fn parse_number_expr<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
) -> Result<Expr, ParseError> {
    match parser.advance() {
        Token::Number(value) => Ok(Expr::Number(value)),
        token => Err(ParseError::ExpectedExpression {
            found: token.to_string(),
        }),
    }
}

/// Parses a bare identifier or, when `(` follows, a call with a
/// comma-separated and possibly empty argument list.
pub fn parse_identifier_expr<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
) -> Result<Expr, ParseError> {
    let name = match parser.advance() {
        Token::Identifier(name) => name,
        token => {
            return Err(ParseError::ExpectedExpression {
                found: token.to_string(),
            })
        }
    };

    if *parser.current_token() != Token::Char('(') {
        return Ok(Expr::Identifier(name));
    }
    parser.advance();

    let mut args = vec![];

    if *parser.current_token() != Token::Char(')') {
        loop {
            args.push(parse_expression(parser)?);

            if *parser.current_token() == Token::Char(')') {
                break;
            }

            if *parser.current_token() != Token::Char(',') {
                return Err(ParseError::ExpectedArgumentSeparator {
                    found: parser.current_token().to_string(),
                });
            }

            parser.advance();
        }
    }
    parser.advance();

    Ok(Expr::Call { callee: name, args })
}

/// Parses `'(' expression ')'`, yielding the inner expression unchanged.
pub fn parse_paren_expr<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
) -> Result<Expr, ParseError> {
    parser.advance();

    let expr = parse_expression(parser)?;

    if *parser.current_token() != Token::Char(')') {
        return Err(ParseError::ExpectedClosingParen {
            found: parser.current_token().to_string(),
        });
    }
    parser.advance();

    Ok(expr)
}

/// The precedence-climbing core.
///
/// Folds binary operators onto `lhs` while the lookahead binds at least
/// as tightly as `min_precedence`; a weaker operator terminates the
/// loop and returns what has been built so far. When the operator after
/// a candidate right-hand side binds strictly tighter than the one just
/// consumed, that sub-expression is resolved first by recursing with
/// `operator precedence + 1` — the +1 is what keeps operators of equal
/// precedence left-associative.
pub fn parse_binop_rhs<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
    min_precedence: i32,
    lhs: Expr,
) -> Result<Expr, ParseError> {
    let mut lhs = lhs;

    loop {
        let tok_prec = parser.token_precedence();

        if tok_prec < min_precedence {
            return Ok(lhs);
        }

        let op = match *parser.current_token() {
            Token::Char(c) => c,
            _ => return Ok(lhs),
        };
        parser.advance();

        let mut rhs = parse_primary(parser)?;

        let next_prec = parser.token_precedence();
        if tok_prec < next_prec {
            rhs = parse_binop_rhs(parser, tok_prec + 1, rhs)?;
        }

        lhs = Expr::binary(op, lhs, rhs);
    }
}

/// Parses `'if' expression 'then' expression 'else' expression`.
///
/// Conditionals sit at the same level as any other primary; both
/// keywords are required and all three branches are always present.
pub fn parse_conditional_expr<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
) -> Result<Expr, ParseError> {
    parser.advance();

    let cond = parse_expression(parser)?;

    if *parser.current_token() != Token::Then {
        return Err(ParseError::ExpectedThen {
            found: parser.current_token().to_string(),
        });
    }
    parser.advance();

    let then_branch = parse_expression(parser)?;

    if *parser.current_token() != Token::Else {
        return Err(ParseError::ExpectedElse {
            found: parser.current_token().to_string(),
        });
    }
    parser.advance();

    let else_branch = parse_expression(parser)?;

    Ok(Expr::Conditional {
        cond: Box::new(cond),
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    })
}
