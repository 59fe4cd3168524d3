use std::collections::HashMap;

use crate::lexer::{lexer::Lexer, tokens::Token};

/// The main parser structure that maintains parsing state.
///
/// The state is one lookahead token pulled from the lexer plus the
/// operator-precedence table, built once at construction and never
/// mutated. Both are owned exclusively by the parsing session; parsing
/// one top-level construct runs to completion before control returns.
pub struct Parser<I: Iterator<Item = char>> {
    lexer: Lexer<I>,
    /// The single token of lookahead the grammar rules dispatch on.
    current: Token,
    /// Binary operator precedences; any token absent here is not a
    /// binary operator.
    precedence: HashMap<char, i32>,
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// Creates a parser over the given lexer and primes the lookahead.
    pub fn new(lexer: Lexer<I>) -> Parser<I> {
        let mut precedence = HashMap::new();
        precedence.insert('<', 10);
        precedence.insert('+', 20);
        precedence.insert('-', 20);
        precedence.insert('*', 40);
        precedence.insert('/', 40);

        let mut lexer = lexer;
        let current = lexer.next_token();

        Parser {
            lexer,
            current,
            precedence,
        }
    }

    /// Returns the current lookahead token without consuming it.
    ///
    /// This is always a real token, including after a parse failure, so
    /// the caller's recovery loop can inspect it to decide how to
    /// resynchronize.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Consumes the lookahead, pulls the next token from the lexer, and
    /// returns the token that was consumed.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// The binary-operator precedence of the current lookahead, or -1 if
    /// it is not a binary operator.
    pub fn token_precedence(&self) -> i32 {
        match self.current {
            Token::Char(c) => self.precedence.get(&c).copied().unwrap_or(-1),
            _ => -1,
        }
    }
}
