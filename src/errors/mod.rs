//! Error types for the front end.
//!
//! This module defines the single error kind the parser can produce.
//! There is no lexical error kind: the lexer is total, every character
//! maps to some token. A parse failure short-circuits every enclosing
//! grammar rule via `?` and reaches the caller unchanged — first failure
//! wins, with no backtracking and no aggregation.

pub mod errors;
