//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts a character
//! source into a stream of tokens for parsing. It handles:
//!
//! - Pull-based tokenization over any `Iterator<Item = char>`
//! - Recognition of keywords, identifiers and numeric literals
//! - Comments (`#` to end of line) and whitespace, both fully transparent
//! - Every remaining printable character as its own single-character token

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
