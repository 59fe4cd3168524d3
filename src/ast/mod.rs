//! AST (Abstract Syntax Tree) module.
//!
//! Contains all definitions related to the AST structure. The node set
//! is closed: the parser only ever constructs these variants, and
//! downstream consumers dispatch over them with exhaustive matches.
//!
//! Submodules:
//! - expressions: the expression node variants
//! - declarations: prototypes, function definitions and top-level items

pub mod declarations;
pub mod expressions;
