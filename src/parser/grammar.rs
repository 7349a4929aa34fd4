//! The grammar: token patterns, value rules and parser settings.
//!
//! A [`Grammar`] is built once and is immutable afterwards. Every call to
//! [`Grammar::parse`] creates its own [`Parser`](super::parser::Parser), so a
//! single grammar can be shared between threads.

use std::{collections::HashMap, fmt::Display};

use crate::{
    ast::ast::Program,
    errors::errors::Error,
    lexer::{
        lexer::{tokenize, Lexer, TokenPatterns},
        tokens::TokenKind,
    },
};

use super::{
    lookups::{create_value_lookups, ValueHandler, ValueLookup},
    parser::parse,
};

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarConfig {
    /// Deepest allowed `{ }` nesting. Deeper input is rejected.
    pub max_depth: usize,
    /// Also accept the `<<` template marker (`key id << name`).
    pub legacy_template_marker: bool,
}

impl GrammarConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn legacy_template_marker(mut self, enabled: bool) -> Self {
        self.legacy_template_marker = enabled;
        self
    }
}

impl Default for GrammarConfig {
    fn default() -> Self {
        GrammarConfig {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            legacy_template_marker: false,
        }
    }
}

pub struct Grammar {
    config: GrammarConfig,
    patterns: TokenPatterns,
    value_lookup: ValueLookup,
}

impl Grammar {
    pub fn new() -> Self {
        Self::with_config(GrammarConfig::default())
    }

    pub fn with_config(config: GrammarConfig) -> Self {
        let mut value_lookup = HashMap::new();
        create_value_lookups(&mut value_lookup);

        Grammar {
            config,
            patterns: TokenPatterns::new(),
            value_lookup,
        }
    }

    pub fn config(&self) -> &GrammarConfig {
        &self.config
    }

    /// Returns the rule that parses a value starting with `kind`.
    pub fn value_handler(&self, kind: TokenKind) -> Option<ValueHandler> {
        self.value_lookup.get(&kind).copied()
    }

    pub fn tokenize<'a>(&'a self, source: &'a str) -> Lexer<'a> {
        tokenize(&self.patterns, source, None)
    }

    /// Parses `source` into a [`Program`]. The first error aborts the parse.
    pub fn parse(&self, source: &str) -> Result<Program, Error> {
        parse(self, source, None)
    }

    /// Like [`Grammar::parse`], naming `file` in error positions.
    pub fn parse_file(&self, source: &str, file: &str) -> Result<Program, Error> {
        parse(self, source, Some(file.to_string()))
    }

    pub(crate) fn patterns(&self) -> &TokenPatterns {
        &self.patterns
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Program   = Statement* .")?;
        writeln!(f, "Statement = <ident> Metadata? (Value (\",\" Value)*)? .")?;
        writeln!(f, "Metadata  = <ident> \",\" \"template\" \":\" <ident>")?;
        writeln!(f, "          | \"template\" \":\" <ident>")?;
        if self.config.legacy_template_marker {
            writeln!(f, "          | <ident> \"<<\" <ident>")?;
            writeln!(f, "          | \"<<\" <ident>")?;
        }
        writeln!(f, "          | <ident> .")?;
        writeln!(f, "Value     = <string> | <float> | <int> | Object .")?;
        write!(
            f,
            "Object    = \"{{\" Statement* \"}}\" .  (max depth {})",
            self.config.max_depth
        )
    }
}
