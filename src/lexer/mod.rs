//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of the `template` keyword, identifiers, strings and numbers
//! - Token position tracking for error reporting
//! - Whitespace and `//` comment skipping

pub mod lexer;
pub mod tokens;
