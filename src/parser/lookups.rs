use std::collections::HashMap;

use crate::{ast::values::Value, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, value::*};

pub type ValueHandler = fn(&mut Parser<'_>) -> Result<Value, Error>;

/// Token kinds that can begin a value, in diagnostic order.
pub const VALUE_START: [TokenKind; 3] = [TokenKind::String, TokenKind::Number, TokenKind::OpenCurly];

/// Token kinds that can begin a statement key.
pub const KEY_START: [TokenKind; 2] = [TokenKind::Identifier, TokenKind::Template];

pub fn create_value_lookups(lookup: &mut ValueLookup) {
    // Literals
    lookup.insert(TokenKind::String, parse_string_value);
    lookup.insert(TokenKind::Number, parse_number_value);

    // Nested blocks
    lookup.insert(TokenKind::OpenCurly, parse_object_value);
}

pub type ValueLookup = HashMap<TokenKind, ValueHandler>;
