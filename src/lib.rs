#![allow(clippy::module_inception)]

//! Front end for the Kaleido expression language.
//!
//! Characters flow through the lexer into tokens, and the parser turns
//! those tokens into an abstract syntax tree one top-level construct at
//! a time. Code generation and evaluation are external concerns; the
//! only product of this crate is a well-formed AST or a typed parse
//! failure describing the first grammar violation encountered.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;
