use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{Token, RESERVED_LOOKUP};

lazy_static! {
    /// Longest decimal prefix of a digit/dot run, in the spirit of
    /// `strtod`: for `1.2.3` this matches `1.2` and the rest is ignored.
    static ref DECIMAL_PREFIX_RE: Regex = Regex::new(r"^[0-9]*\.?[0-9]*").unwrap();
}

/// Pull-based lexer over an arbitrary character source.
///
/// The lexer is a strict forward cursor: it holds exactly one buffered
/// character of lookahead and never rewinds. Once the source is
/// exhausted, `next_token` returns [`Token::Eof`] on every further call.
pub struct Lexer<I: Iterator<Item = char>> {
    chars: I,
    last_char: Option<char>,
}

impl<I: Iterator<Item = char>> Lexer<I> {
    pub fn new(source: I) -> Lexer<I> {
        let mut chars = source;
        let last_char = chars.next();
        Lexer { chars, last_char }
    }

    fn advance(&mut self) {
        self.last_char = self.chars.next();
    }

    /// Produces the next token from the source.
    pub fn next_token(&mut self) -> Token {
        loop {
            match self.last_char {
                Some(c) if c.is_whitespace() => self.advance(),
                Some(c) if c.is_ascii_alphabetic() => return self.scan_word(c),
                Some(c) if c.is_ascii_digit() || c == '.' => return self.scan_number(c),
                // Comments are fully transparent: discard to end of line
                // and resume rule evaluation from the top.
                Some('#') => self.skip_comment(),
                Some(c) => {
                    self.advance();
                    return Token::Char(c);
                }
                None => return Token::Eof,
            }
        }
    }

    /// Scans an identifier and resolves it against the reserved-word set.
    fn scan_word(&mut self, first: char) -> Token {
        let mut word = String::from(first);

        self.advance();
        while let Some(c) = self.last_char {
            if !c.is_ascii_alphanumeric() {
                break;
            }
            word.push(c);
            self.advance();
        }

        if let Some(token) = RESERVED_LOOKUP.get(word.as_str()) {
            token.clone()
        } else {
            Token::Identifier(word)
        }
    }

    /// Scans a run of digits and dots as a numeric literal.
    ///
    /// The scan itself is deliberately loose: `1.2.3` is accumulated
    /// whole, then only its longest valid decimal prefix is converted,
    /// matching the lenient `strtod` behavior of the reference grammar.
    /// A run with no usable prefix (for example `..`) yields `0`.
    fn scan_number(&mut self, first: char) -> Token {
        let mut digits = String::from(first);

        self.advance();
        while let Some(c) = self.last_char {
            if !c.is_ascii_digit() && c != '.' {
                break;
            }
            digits.push(c);
            self.advance();
        }

        let prefix = DECIMAL_PREFIX_RE
            .find(&digits)
            .map(|m| m.as_str())
            .unwrap_or("");

        Token::Number(prefix.parse().unwrap_or(0.0))
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.last_char {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }
}
