use crate::{
    ast::{
        ast::Program,
        statements::{Metadata, Statement},
        values::Value,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{KEY_START, VALUE_START},
    parser::Parser,
    value::parse_value,
};

/// Parses statements until `terminator` (`EOF` or `}`) is the current token.
/// The terminator itself is left for the caller.
pub fn parse_program(parser: &mut Parser, terminator: TokenKind) -> Result<Program, Error> {
    let mut statements = Vec::new();

    loop {
        let token = parser.current_token()?;
        if token.kind == terminator {
            break;
        }

        if !token.is_one_of_many(&KEY_START) {
            let mut expected = KEY_START.to_vec();
            expected.push(terminator);
            return Err(parser.unexpected(&token, &expected));
        }

        statements.push(parse_stmt(parser)?);
    }

    Ok(Program::new(statements))
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let key = parser.expect_one_of(&KEY_START)?.value;
    let metadata = parse_metadata(parser)?;
    let values = parse_value_list(parser)?;

    Ok(Statement {
        key,
        metadata,
        values,
    })
}

pub fn parse_metadata(parser: &mut Parser) -> Result<Option<Metadata>, Error> {
    let legacy_marker = parser.config().legacy_template_marker;

    match parser.current_token_kind()? {
        TokenKind::Identifier => {
            let id = parser.advance()?.value;

            if parser.peek_kind(0)? == TokenKind::Comma && parser.peek_kind(1)? == TokenKind::Template {
                parser.advance()?;
                let template = parse_template_ref(parser)?;
                return Ok(Some(Metadata::IdAndTemplate { id, template }));
            }

            if legacy_marker && parser.current_token_kind()? == TokenKind::TemplateMarker {
                parser.advance()?;
                let template = parser.expect(TokenKind::Identifier)?.value;
                return Ok(Some(Metadata::IdAndTemplate { id, template }));
            }

            Ok(Some(Metadata::IdOnly(id)))
        }
        TokenKind::Template => Ok(Some(Metadata::TemplateOnly(parse_template_ref(parser)?))),
        TokenKind::TemplateMarker if legacy_marker => {
            parser.advance()?;
            let template = parser.expect(TokenKind::Identifier)?.value;
            Ok(Some(Metadata::TemplateOnly(template)))
        }
        _ => Ok(None),
    }
}

/// `template : <ident>`
fn parse_template_ref(parser: &mut Parser) -> Result<String, Error> {
    parser.expect(TokenKind::Template)?;
    parser.expect(TokenKind::Colon)?;
    Ok(parser.expect(TokenKind::Identifier)?.value)
}

/// `(Value ("," Value)*)?`
pub fn parse_value_list(parser: &mut Parser) -> Result<Vec<Value>, Error> {
    let mut values = Vec::new();

    if !VALUE_START.contains(&parser.current_token_kind()?) {
        return Ok(values);
    }

    values.push(parse_value(parser)?);
    while parser.current_token_kind()? == TokenKind::Comma {
        parser.advance()?;
        values.push(parse_value(parser)?);
    }

    Ok(values)
}
