//! Error types and error handling.
//!
//! This module defines the errors returned by lexing and parsing:
//!
//! - Error structures with source position information
//! - Lex-phase and syntax-phase error variants
//! - Expected-token sets for syntax errors
//! - Helpful error messages and suggestions

pub mod errors;
