use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Token> = {
        let mut map = HashMap::new();
        map.insert("def", Token::Def);
        map.insert("extern", Token::Extern);
        map.insert("if", Token::If);
        map.insert("then", Token::Then);
        map.insert("else", Token::Else);
        map
    };
}

/// One lexical token.
///
/// Tokens are transient values with no identity beyond the parser's
/// current lookahead. Any character the lexer has no rule for becomes a
/// `Char` token carrying itself, so the lexer is total over its input.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Eof,

    // Reserved
    Def,
    Extern,
    If,
    Then,
    Else,

    Identifier(String),
    Number(f64),

    /// Any other printable character acting as its own token kind:
    /// operators, parentheses, comma, semicolon.
    Char(char),
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Eof => write!(f, "end of input"),
            Token::Def => write!(f, "'def'"),
            Token::Extern => write!(f, "'extern'"),
            Token::If => write!(f, "'if'"),
            Token::Then => write!(f, "'then'"),
            Token::Else => write!(f, "'else'"),
            Token::Identifier(name) => write!(f, "identifier '{}'", name),
            Token::Number(value) => write!(f, "number {}", value),
            Token::Char(c) => write!(f, "'{}'", c),
        }
    }
}
