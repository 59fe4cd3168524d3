//! Unit tests for the lexer module.

use super::lexer::Lexer;
use super::tokens::Token;

fn lex_all(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source.chars());
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token == Token::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}

#[test]
fn test_lex_definition() {
    let tokens = lex_all("def f(x) x+1");

    assert_eq!(
        tokens,
        vec![
            Token::Def,
            Token::Identifier("f".to_string()),
            Token::Char('('),
            Token::Identifier("x".to_string()),
            Token::Char(')'),
            Token::Identifier("x".to_string()),
            Token::Char('+'),
            Token::Number(1.0),
            Token::Eof,
        ]
    );
}

#[test]
fn test_lex_keywords_are_case_sensitive() {
    assert_eq!(lex_all("def")[0], Token::Def);
    assert_eq!(lex_all("Def")[0], Token::Identifier("Def".to_string()));
    assert_eq!(lex_all("extern")[0], Token::Extern);
    assert_eq!(lex_all("if")[0], Token::If);
    assert_eq!(lex_all("then")[0], Token::Then);
    assert_eq!(lex_all("else")[0], Token::Else);
}

#[test]
fn test_lex_keyword_prefix_is_identifier() {
    assert_eq!(
        lex_all("definition")[0],
        Token::Identifier("definition".to_string())
    );
    assert_eq!(lex_all("iffy")[0], Token::Identifier("iffy".to_string()));
}

#[test]
fn test_lex_numbers() {
    assert_eq!(lex_all("42")[0], Token::Number(42.0));
    assert_eq!(lex_all("3.14")[0], Token::Number(3.14));
    assert_eq!(lex_all(".5")[0], Token::Number(0.5));
}

#[test]
fn test_lex_lenient_number_takes_decimal_prefix() {
    // Multiple dots are accepted and silently truncated at the longest
    // valid decimal prefix, like strtod would.
    let tokens = lex_all("1.2.3");
    assert_eq!(tokens, vec![Token::Number(1.2), Token::Eof]);
}

#[test]
fn test_lex_dots_only_is_zero() {
    assert_eq!(lex_all("..")[0], Token::Number(0.0));
}

#[test]
fn test_lex_comments_are_transparent() {
    assert_eq!(lex_all("1 # comment\n+2"), lex_all("1+2"));
}

#[test]
fn test_lex_comment_at_end_of_input() {
    assert_eq!(lex_all("1 # trailing"), vec![Token::Number(1.0), Token::Eof]);
}

#[test]
fn test_lex_whitespace_is_skipped() {
    assert_eq!(lex_all(" \t\n 7 \n"), vec![Token::Number(7.0), Token::Eof]);
}

#[test]
fn test_lex_unknown_characters_become_char_tokens() {
    let tokens = lex_all("a @ b;");
    assert_eq!(
        tokens,
        vec![
            Token::Identifier("a".to_string()),
            Token::Char('@'),
            Token::Identifier("b".to_string()),
            Token::Char(';'),
            Token::Eof,
        ]
    );
}

#[test]
fn test_lex_eof_is_idempotent() {
    let mut lexer = Lexer::new("x".chars());
    assert_eq!(lexer.next_token(), Token::Identifier("x".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_lex_empty_source() {
    assert_eq!(lex_all(""), vec![Token::Eof]);
}
