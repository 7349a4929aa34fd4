use crate::{
    ast::values::Value,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::VALUE_START, parser::Parser, stmt::parse_program};

pub fn parse_value(parser: &mut Parser) -> Result<Value, Error> {
    let token = parser.current_token()?;

    match parser.grammar().value_handler(token.kind) {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected(&token, &VALUE_START)),
    }
}

pub fn parse_string_value(parser: &mut Parser) -> Result<Value, Error> {
    let token = parser.expect(TokenKind::String)?;
    Ok(Value::StringLit(token.value))
}

pub fn parse_number_value(parser: &mut Parser) -> Result<Value, Error> {
    let token = parser.expect(TokenKind::Number)?;
    parse_number(&token)
}

/// `{ Statement* }`
pub fn parse_object_value(parser: &mut Parser) -> Result<Value, Error> {
    let open = parser.current_token()?;
    parser.enter_block(open.span.start.clone())?;
    parser.expect(TokenKind::OpenCurly)?;

    let program = parse_program(parser, TokenKind::CloseCurly)?;

    parser.expect(TokenKind::CloseCurly)?;
    parser.exit_block();

    Ok(Value::Object(program))
}

/// Converts a number token. A `.` anywhere makes it a float.
pub fn parse_number(token: &Token) -> Result<Value, Error> {
    let text = token.value.as_str();
    let error = || {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )
    };

    if !is_well_formed_number(text) {
        return Err(error());
    }

    if text.contains('.') {
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Value::FloatLit(value)),
            _ => Err(error()),
        }
    } else {
        text.parse::<i64>().map(Value::IntLit).map_err(|_| error())
    }
}

/// `-? digits ("." digits)?`
fn is_well_formed_number(text: &str) -> bool {
    let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit());

    let unsigned = text.strip_prefix('-').unwrap_or(text);
    match unsigned.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => is_digits(unsigned),
    }
}
