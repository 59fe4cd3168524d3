//! Interactive read-parse-print driver.
//!
//! Reads characters from stdin and parses one top-level construct per
//! iteration, dispatching on the current lookahead token. Parsed
//! constructs are printed in their Debug form; on a parse failure the
//! diagnostic is reported and one token is discarded to resynchronize.

use std::io::{self, Read, Write};

use kaleido::errors::errors::ParseError;
use kaleido::lexer::{lexer::Lexer, tokens::Token};
use kaleido::parser::{
    decl::{parse_definition, parse_extern, parse_top_level_expr},
    parser::Parser,
};

fn main() {
    prompt();

    let stdin = io::stdin();
    let chars = stdin.lock().bytes().filter_map(|b| b.ok()).map(char::from);
    let mut parser = Parser::new(Lexer::new(chars));

    loop {
        prompt();

        match parser.current_token() {
            Token::Eof => return,

            // A stray ';' between constructs is skipped, not parsed.
            Token::Char(';') => {
                parser.advance();
            }

            Token::Def => handle_definition(&mut parser),
            Token::Extern => handle_extern(&mut parser),
            _ => handle_top_level_expression(&mut parser),
        }
    }
}

fn prompt() {
    print!("ready> ");
    io::stdout().flush().expect("failed to flush stdout");
}

fn handle_definition<I: Iterator<Item = char>>(parser: &mut Parser<I>) {
    match parse_definition(parser) {
        Ok(function) => println!("Parsed a function definition:\n{:#?}", function),
        Err(error) => recover(parser, error),
    }
}

fn handle_extern<I: Iterator<Item = char>>(parser: &mut Parser<I>) {
    match parse_extern(parser) {
        Ok(prototype) => println!("Parsed an extern declaration:\n{:#?}", prototype),
        Err(error) => recover(parser, error),
    }
}

fn handle_top_level_expression<I: Iterator<Item = char>>(parser: &mut Parser<I>) {
    match parse_top_level_expr(parser) {
        Ok(function) => println!("Parsed a top-level expression:\n{:#?}", function.body),
        Err(error) => recover(parser, error),
    }
}

/// Reports the diagnostic and discards one token so the next iteration
/// does not trip over the same lookahead.
fn recover<I: Iterator<Item = char>>(parser: &mut Parser<I>, error: ParseError) {
    eprintln!("Error: {}", error);
    parser.advance();
}
