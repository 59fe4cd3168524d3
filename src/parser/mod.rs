//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms the
//! lexer's token stream into an AST, one top-level construct at a time.
//! Binary expressions are resolved with precedence climbing: a minimum
//! precedence threshold decides when a sub-expression folds and when a
//! tighter-binding operator recurses first.
//!
//! The parser is driven by exactly one token of lookahead. Grammar rules
//! call a single `advance` primitive to consume it; there is no pushback
//! and no further peeking.

pub mod decl;
pub mod expr;
pub mod parser;
