use std::sync::Arc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Turns a matched lexeme into a token, or `None` for skipped input.
pub type RegexHandler = fn(&str, Span) -> Result<Option<Token>, Error>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    /// `regex` must be anchored with `^`; patterns are matched against the
    /// unconsumed remainder of the input.
    fn new(regex: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(regex).expect("token patterns are valid regexes"),
            handler,
        }
    }
}

/// The ordered pattern table. The first pattern that matches wins.
#[derive(Clone)]
pub struct TokenPatterns {
    patterns: Vec<RegexPattern>,
}

impl TokenPatterns {
    pub fn new() -> Self {
        TokenPatterns {
            patterns: vec![
                RegexPattern::new("^\\s+", skip_handler),
                RegexPattern::new("^//[^\\n]*", skip_handler),
                RegexPattern::new("^/\\*(?s:.)*?\\*/", skip_handler),
                RegexPattern::new("^/\\*", unterminated_comment_handler),
                RegexPattern::new("^\\p{L}[\\p{L}\\p{Nd}_]*", symbol_handler),
                // Trailing letters and dots stay in the lexeme so that `4a` or
                // `1.2.3` fail number conversion instead of splitting.
                RegexPattern::new("^-?[0-9][\\p{L}\\p{Nd}_.]*", number_handler),
                // Strings end at the line; a raw newline leaves them unterminated.
                RegexPattern::new("^\"(?:[^\"\\\\\\n]|\\\\.)*\"", string_handler),
                RegexPattern::new("^\"", unterminated_string_handler),
                RegexPattern::new("^<<", MK_DEFAULT_HANDLER!(TokenKind::TemplateMarker)),
                RegexPattern::new("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
                RegexPattern::new("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
                RegexPattern::new("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
                RegexPattern::new("^:", MK_DEFAULT_HANDLER!(TokenKind::Colon)),
            ],
        }
    }
}

impl Default for TokenPatterns {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy token stream over a source string.
///
/// Yields tokens in source order, ending with a single `EOF` token. The first
/// lexing error is yielded once and ends the stream.
pub struct Lexer<'a> {
    patterns: &'a TokenPatterns,
    source: &'a str,
    pos: usize,
    file: Arc<String>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(patterns: &'a TokenPatterns, source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Arc::new(file)
        } else {
            Arc::new(String::from("<input>"))
        };

        Lexer {
            patterns,
            source,
            pos: 0,
            file: file_name,
            finished: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        let source = self.source;
        &source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    pub fn file(&self) -> Arc<String> {
        Arc::clone(&self.file)
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos, Arc::clone(&self.file))
    }

    fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos, Arc::clone(&self.file)),
            end: Position(self.pos + len, Arc::clone(&self.file)),
        }
    }

    fn next_match(&mut self) -> Result<Option<Token>, Error> {
        let remaining = self.remainder();
        let patterns = self.patterns;

        for pattern in patterns.patterns.iter() {
            if let Some(found) = pattern.regex.find(remaining) {
                let token = (pattern.handler)(found.as_str(), self.span_of(found.end()))?;
                self.advance_n(found.end());
                return Ok(token);
            }
        }

        let token = self.at().map(String::from).unwrap_or_default();
        Err(Error::new(
            ErrorImpl::UnrecognisedToken { token },
            self.get_position(),
        ))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while !self.at_eof() {
            match self.next_match() {
                Ok(Some(token)) => return Some(Ok(token)),
                Ok(None) => continue,
                Err(error) => {
                    self.finished = true;
                    return Some(Err(error));
                }
            }
        }

        self.finished = true;
        Some(Ok(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.span_of(0))))
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

fn skip_handler(_value: &str, _span: Span) -> Result<Option<Token>, Error> {
    Ok(None)
}

fn number_handler(value: &str, span: Span) -> Result<Option<Token>, Error> {
    Ok(Some(MK_TOKEN!(TokenKind::Number, String::from(value), span)))
}

// The raw lexeme, quotes and escapes included, is the token value.
fn string_handler(value: &str, span: Span) -> Result<Option<Token>, Error> {
    Ok(Some(MK_TOKEN!(TokenKind::String, String::from(value), span)))
}

fn unterminated_string_handler(_value: &str, span: Span) -> Result<Option<Token>, Error> {
    Err(Error::new(ErrorImpl::UnterminatedString, span.start))
}

fn unterminated_comment_handler(_value: &str, span: Span) -> Result<Option<Token>, Error> {
    Err(Error::new(ErrorImpl::UnterminatedComment, span.start))
}

fn symbol_handler(value: &str, span: Span) -> Result<Option<Token>, Error> {
    if let Some(kind) = RESERVED_LOOKUP.get(value) {
        Ok(Some(MK_TOKEN!(*kind, String::from(value), span)))
    } else {
        Ok(Some(MK_TOKEN!(TokenKind::Identifier, String::from(value), span)))
    }
}

/// Starts lazily tokenizing `source`.
pub fn tokenize<'a>(patterns: &'a TokenPatterns, source: &'a str, file: Option<String>) -> Lexer<'a> {
    Lexer::new(patterns, source, file)
}

/// Tokenizes all of `source`, stopping at the first error.
pub fn tokenize_all(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let patterns = TokenPatterns::new();
    tokenize(&patterns, source, file).collect()
}
