//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the statement language including:
//! - Keys, metadata variants and value lists
//! - Numeric classification
//! - Nested object values and the depth limit
//! - Error positions and expected sets

use rstest::rstest;

use super::grammar::{Grammar, GrammarConfig};
use crate::{
    ast::{
        ast::Program,
        statements::{Metadata, Statement},
        values::Value,
    },
    errors::errors::{ErrorImpl, ErrorPhase},
    lexer::tokens::TokenKind,
};

fn parse(source: &str) -> Program {
    Grammar::new().parse(source).unwrap()
}

fn string(text: &str) -> Value {
    Value::StringLit(text.to_string())
}

#[rstest]
#[case("key")]
#[case("a")]
#[case("snake_case9")]
#[case("template")]
#[case("ключ")]
#[case("Größe_2")]
fn test_parse_bare_key(#[case] key: &str) {
    let program = parse(key);

    assert_eq!(program.statements, vec![Statement::new(key, None, vec![])]);
}

#[test]
fn test_parse_empty_input() {
    assert!(parse("").is_empty());
    assert!(parse("  // only a comment\n").is_empty());
    assert!(parse("/* only\n a comment */").is_empty());
}

#[test]
fn test_parse_skips_block_comments() {
    let program = parse("/* note */ k 1");

    assert_eq!(program.statements, vec![Statement::new("k", None, vec![Value::IntLit(1)])]);
}

#[test]
fn test_parse_unicode_key_with_value() {
    let program = parse("ключ 1");

    assert_eq!(program.get("ключ").unwrap().values, vec![Value::IntLit(1)]);
}

#[test]
fn test_parse_string_value_keeps_quotes() {
    let program = parse(r#"key "value""#);

    assert_eq!(program.statements[0].key, "key");
    assert_eq!(program.statements[0].values, vec![string("\"value\"")]);
}

#[rstest]
#[case("k 4", Value::IntLit(4))]
#[case("k -4", Value::IntLit(-4))]
#[case("k 4.5", Value::FloatLit(4.5))]
#[case("k 4.0", Value::FloatLit(4.0))]
#[case("k -0.25", Value::FloatLit(-0.25))]
#[case("k 9223372036854775807", Value::IntLit(i64::MAX))]
fn test_parse_number_classification(#[case] source: &str, #[case] expected: Value) {
    let program = parse(source);

    assert_eq!(program.statements[0].values, vec![expected]);
}

#[test]
fn test_parse_value_list_order() {
    let program = parse(r#"k "a", 1, 2.5"#);

    assert_eq!(
        program.statements[0].values,
        vec![string("\"a\""), Value::IntLit(1), Value::FloatLit(2.5)]
    );
}

#[rstest]
#[case(r#"k id "s""#, "id", "")]
#[case(r#"k template: t "s""#, "", "t")]
#[case(r#"k id, template: t "s""#, "id", "t")]
#[case(r#"k имя "s""#, "имя", "")]
#[case(r#"k id, template: шаблон "s""#, "id", "шаблон")]
fn test_parse_metadata_accessors(#[case] source: &str, #[case] id: &str, #[case] template: &str) {
    let program = parse(source);
    let statement = &program.statements[0];

    assert_eq!(statement.id(), id);
    assert_eq!(statement.template(), template);
    assert_eq!(statement.values, vec![string("\"s\"")]);
}

#[test]
fn test_parse_metadata_variants() {
    let program = parse("a x\nb template: t\nc x, template: t");

    assert_eq!(program.statements[0].metadata, Some(Metadata::IdOnly("x".to_string())));
    assert_eq!(
        program.statements[1].metadata,
        Some(Metadata::TemplateOnly("t".to_string()))
    );
    assert_eq!(
        program.statements[2].metadata,
        Some(Metadata::IdAndTemplate {
            id: "x".to_string(),
            template: "t".to_string()
        })
    );
}

#[test]
fn test_parse_bare_words_split_statements() {
    // `b` is metadata of `a`; `c` starts the next statement.
    let program = parse("a b c 1");

    assert_eq!(program.len(), 2);
    assert_eq!(program.statements[0].id(), "b");
    assert!(program.statements[0].values.is_empty());
    assert_eq!(program.statements[1].key, "c");
    assert_eq!(program.statements[1].values, vec![Value::IntLit(1)]);
}

#[test]
fn test_parse_nested_object() {
    let program = parse(r#"k { o "v" }"#);

    let expected = Value::Object(Program::new(vec![Statement::new(
        "o",
        None,
        vec![string("\"v\"")],
    )]));
    assert_eq!(program.statements[0].values, vec![expected]);
}

#[test]
fn test_parse_object_statement_order() {
    let program = parse(r#"k { a "1" b "2" }"#);

    let object = program.statements[0].values[0].as_object().unwrap();
    let keys: Vec<&str> = object.iter().map(|statement| statement.key.as_str()).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_parse_empty_object_and_mixed_list() {
    let program = parse("k {}, 1, { inner id { deep 2.0 } }");
    let values = &program.statements[0].values;

    assert_eq!(values.len(), 3);
    assert_eq!(values[0], Value::Object(Program::default()));
    assert_eq!(values[1], Value::IntLit(1));

    let inner = &values[2].as_object().unwrap().statements[0];
    assert_eq!(inner.key, "inner");
    assert_eq!(inner.id(), "id");
    let deep = &inner.values[0].as_object().unwrap().statements[0];
    assert_eq!(deep.values, vec![Value::FloatLit(2.0)]);
}

#[test]
fn test_parse_statements_are_not_line_based() {
    let single = parse(r#"a 1 b "x""#);
    let multi = parse("a\n1\n\nb\n\"x\"\n");

    assert_eq!(single, multi);
}

#[rstest]
#[case("k 4a")]
#[case("k 1.2.3")]
#[case("k 4.")]
#[case("k 99999999999999999999")]
fn test_parse_bad_number(#[case] source: &str) {
    let error = Grammar::new().parse(source).unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_phase(), ErrorPhase::Syntax);
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_parse_unterminated_string_fails() {
    let error = Grammar::new().parse("k \"open").unwrap_err();

    assert_eq!(error.get_phase(), ErrorPhase::Lex);
    assert_eq!(error.get_internal_error(), &ErrorImpl::UnterminatedString);
}

#[test]
fn test_parse_string_with_raw_newline_fails() {
    let error = Grammar::new().parse("k \"a\nb\"").unwrap_err();

    assert_eq!(error.get_phase(), ErrorPhase::Lex);
    assert_eq!(error.get_internal_error(), &ErrorImpl::UnterminatedString);
}

#[test]
fn test_parse_unterminated_block_comment_fails() {
    let error = Grammar::new().parse("k 1 /* open").unwrap_err();

    assert_eq!(error.get_phase(), ErrorPhase::Lex);
    assert_eq!(error.get_internal_error(), &ErrorImpl::UnterminatedComment);
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_parse_unmatched_open_curly() {
    let error = Grammar::new().parse("k { a 1").unwrap_err();
    let expected = error.get_expected().unwrap();

    assert_eq!(error.get_position().0, 7);
    assert!(expected.contains(TokenKind::CloseCurly));
    assert!(expected.contains(TokenKind::Identifier));
    assert!(expected.contains(TokenKind::Template));
}

#[test]
fn test_parse_stray_close_curly() {
    let error = Grammar::new().parse("k 1 }").unwrap_err();

    assert_eq!(error.get_position().0, 4);
    assert_eq!(
        error.get_expected().unwrap().kinds(),
        &[TokenKind::Identifier, TokenKind::Template, TokenKind::EOF]
    );
}

#[test]
fn test_parse_trailing_comma() {
    let error = Grammar::new().parse("k 1,").unwrap_err();
    let expected = error.get_expected().unwrap();

    assert_eq!(error.get_position().0, 4);
    assert_eq!(
        expected.kinds(),
        &[TokenKind::String, TokenKind::Number, TokenKind::OpenCurly]
    );
}

#[test]
fn test_parse_template_requires_colon() {
    let error = Grammar::new().parse("k template t").unwrap_err();

    assert_eq!(error.get_expected().unwrap().kinds(), &[TokenKind::Colon]);
    assert_eq!(error.get_position().0, 11);
}

#[test]
fn test_parse_id_comma_template_requires_colon() {
    let error = Grammar::new().parse("k id, template t").unwrap_err();

    assert_eq!(error.get_expected().unwrap().kinds(), &[TokenKind::Colon]);
}

#[test]
fn test_parse_lex_error_after_valid_prefix() {
    let error = Grammar::new().parse("a 1\nb 2\nc #").unwrap_err();

    assert_eq!(error.get_phase(), ErrorPhase::Lex);
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_parse_depth_limit() {
    let grammar = Grammar::with_config(GrammarConfig::default().max_depth(2));

    assert!(grammar.parse("k { a { b 1 } }").is_ok());

    let error = grammar.parse("k { a { b { c 1 } } }").unwrap_err();
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::NestingTooDeep { limit: 2 }
    );
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_parse_default_depth_limit_rejects_deep_input() {
    let depth = GrammarConfig::DEFAULT_MAX_DEPTH + 1;
    let source = format!("{}{}", "k { ".repeat(depth), "} ".repeat(depth));

    let error = Grammar::new().parse(&source).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");

    let source = format!("{}{}", "k { ".repeat(depth - 1), "} ".repeat(depth - 1));
    assert!(Grammar::new().parse(&source).is_ok());
}

#[test]
fn test_parse_legacy_marker_disabled_by_default() {
    let error = Grammar::new().parse("k id << t").unwrap_err();

    assert_eq!(error.get_position().0, 5);
}

#[test]
fn test_parse_legacy_template_marker() {
    let grammar = Grammar::with_config(GrammarConfig::default().legacy_template_marker(true));
    let program = grammar.parse("a id << t \"s\"\nb << t 1").unwrap();

    assert_eq!(
        program.statements[0].metadata,
        Some(Metadata::IdAndTemplate {
            id: "id".to_string(),
            template: "t".to_string()
        })
    );
    assert_eq!(program.statements[0].values, vec![string("\"s\"")]);
    assert_eq!(
        program.statements[1].metadata,
        Some(Metadata::TemplateOnly("t".to_string()))
    );
    assert_eq!(program.statements[1].values, vec![Value::IntLit(1)]);
}

#[test]
fn test_parse_file_names_errors() {
    let error = Grammar::new().parse_file("k ,", "settings.lc").unwrap_err();

    assert_eq!(error.get_position().1.as_str(), "settings.lc");
}

#[test]
fn test_grammar_display() {
    let rendered = Grammar::new().to_string();

    assert!(rendered.starts_with("Program   = Statement* ."));
    assert!(rendered.contains("\"template\" \":\" <ident>"));
    assert!(!rendered.contains("<<"));

    let legacy = Grammar::with_config(GrammarConfig::default().legacy_template_marker(true));
    assert!(legacy.to_string().contains("\"<<\" <ident>"));
}

#[test]
fn test_grammar_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Grammar>();

    let grammar = Grammar::new();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|index| {
                let grammar = &grammar;
                scope.spawn(move || grammar.parse(&format!("k {}", index)).unwrap())
            })
            .collect();

        for (index, handle) in handles.into_iter().enumerate() {
            let program = handle.join().unwrap();
            assert_eq!(program.statements[0].values, vec![Value::IntLit(index as i64)]);
        }
    });
}
