//! Parser module for building the syntax tree.
//!
//! This module contains a recursive-descent parser that turns the token
//! stream into a [`Program`](crate::ast::ast::Program). It handles:
//!
//! - Statement parsing (key, metadata, value list)
//! - Metadata disambiguation with two tokens of lookahead
//! - Value parsing through a lookup table keyed by token kind
//! - Nested `{ }` blocks with a bounded depth
//!
//! Parsing stops at the first error; there is no recovery.

pub mod grammar;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod value;

#[cfg(test)]
mod tests;
