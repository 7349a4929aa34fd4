//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for punctuation
//!
//! These macros reduce boilerplate in the token pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's raw source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for fixed punctuation.
///
/// The generated handler wraps the matched text in a token of the given kind.
///
/// # Example
///
/// ```ignore
/// RegexPattern::new("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |value: &str,
         span: $crate::Span|
         -> Result<Option<$crate::lexer::tokens::Token>, $crate::errors::errors::Error> {
            Ok(Some($crate::MK_TOKEN!($kind, String::from(value), span)))
        }
    };
}
