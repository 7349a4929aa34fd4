//! Parser state and the parse entry point.
//!
//! The parser pulls tokens lazily from the [`Lexer`] into a small lookahead
//! buffer. Most rules look at one token; metadata needs two to tell
//! `key id` apart from `key id, template: name`.

use std::{collections::VecDeque, sync::Arc};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl, Expected},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{Token, TokenKind},
    },
    Position, Span, MK_TOKEN,
};

use super::{
    grammar::{Grammar, GrammarConfig},
    stmt::parse_program,
};

/// Per-call parsing state.
pub struct Parser<'a> {
    /// The grammar being applied
    grammar: &'a Grammar,
    /// Lazy token source
    tokens: Lexer<'a>,
    /// Tokens pulled from the lexer but not yet consumed
    lookahead: VecDeque<Token>,
    /// Current `{ }` nesting depth
    depth: usize,
    /// The name of the source being parsed
    file: Arc<String>,
}

impl<'a> Parser<'a> {
    pub fn new(grammar: &'a Grammar, source: &'a str, file: Option<String>) -> Self {
        let tokens = tokenize(grammar.patterns(), source, file);
        let file = tokens.file();

        Parser {
            grammar,
            tokens,
            lookahead: VecDeque::new(),
            depth: 0,
            file,
        }
    }

    pub fn grammar(&self) -> &'a Grammar {
        self.grammar
    }

    pub fn config(&self) -> &'a GrammarConfig {
        self.grammar.config()
    }

    /// Pulls tokens until `n` are buffered or the lexer is exhausted.
    fn fill(&mut self, n: usize) -> Result<(), Error> {
        while self.lookahead.len() < n {
            match self.tokens.next() {
                Some(token) => self.lookahead.push_back(token?),
                None => break,
            }
        }
        Ok(())
    }

    fn end_of_input(&self) -> Token {
        let end = self.tokens.source_len();
        MK_TOKEN!(
            TokenKind::EOF,
            String::from("EOF"),
            Span {
                start: Position(end, Arc::clone(&self.file)),
                end: Position(end, Arc::clone(&self.file)),
            }
        )
    }

    /// Returns the token `n` places ahead without consuming anything.
    /// Past the end of input this is always `EOF`.
    pub fn peek(&mut self, n: usize) -> Result<Token, Error> {
        self.fill(n + 1)?;
        match self.lookahead.get(n) {
            Some(token) => Ok(token.clone()),
            None => Ok(self.end_of_input()),
        }
    }

    pub fn peek_kind(&mut self, n: usize) -> Result<TokenKind, Error> {
        self.fill(n + 1)?;
        Ok(self.lookahead.get(n).map_or(TokenKind::EOF, |token| token.kind))
    }

    /// Returns the current token without advancing.
    pub fn current_token(&mut self) -> Result<Token, Error> {
        self.peek(0)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&mut self) -> Result<TokenKind, Error> {
        self.peek_kind(0)
    }

    /// Consumes and returns the current token. `EOF` is never consumed.
    pub fn advance(&mut self) -> Result<Token, Error> {
        if self.peek_kind(0)? == TokenKind::EOF {
            return self.peek(0);
        }

        match self.lookahead.pop_front() {
            Some(token) => Ok(token),
            None => Ok(self.end_of_input()),
        }
    }

    /// Consumes the current token if it is one of `expected_kinds`.
    pub fn expect_one_of(&mut self, expected_kinds: &[TokenKind]) -> Result<Token, Error> {
        let token = self.current_token()?;
        if token.is_one_of_many(expected_kinds) {
            self.advance()
        } else {
            Err(self.unexpected(&token, expected_kinds))
        }
    }

    /// Consumes the current token if it has kind `expected_kind`.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_one_of(&[expected_kind])
    }

    /// Builds the syntax error for `token` appearing where one of
    /// `expected_kinds` was required.
    pub fn unexpected(&self, token: &Token, expected_kinds: &[TokenKind]) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: Expected::from(expected_kinds),
                token: token.value.clone(),
                found: token.kind,
            },
            token.span.start.clone(),
        )
    }

    /// Records entry into a `{ }` block opened at `position`.
    pub fn enter_block(&mut self, position: Position) -> Result<(), Error> {
        let limit = self.config().max_depth;
        if self.depth >= limit {
            return Err(Error::new(ErrorImpl::NestingTooDeep { limit }, position));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn exit_block(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Parses `source` with `grammar` into a Program.
///
/// This is the entry point behind [`Grammar::parse`]. Parsing stops at the
/// first lexing or syntax error and no partial tree is returned.
pub fn parse(grammar: &Grammar, source: &str, file: Option<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(grammar, source, file);

    let program = parse_program(&mut parser, TokenKind::EOF)?;
    parser.expect(TokenKind::EOF)?;

    Ok(program)
}
