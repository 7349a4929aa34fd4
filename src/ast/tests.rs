//! Unit tests for the AST accessors.

use super::{
    ast::Program,
    statements::{Metadata, Statement},
    values::{Value, ValueType},
};

#[test]
fn test_metadata_id_only() {
    let metadata = Metadata::IdOnly("id".to_string());

    assert_eq!(metadata.id(), "id");
    assert_eq!(metadata.template(), "");
}

#[test]
fn test_metadata_template_only() {
    let metadata = Metadata::TemplateOnly("base".to_string());

    assert_eq!(metadata.id(), "");
    assert_eq!(metadata.template(), "base");
}

#[test]
fn test_metadata_id_and_template() {
    let metadata = Metadata::IdAndTemplate {
        id: "web".to_string(),
        template: "server".to_string(),
    };

    assert_eq!(metadata.id(), "web");
    assert_eq!(metadata.template(), "server");
}

#[test]
fn test_statement_without_metadata() {
    let statement = Statement::new("key", None, vec![]);

    assert_eq!(statement.id(), "");
    assert_eq!(statement.template(), "");
}

#[test]
fn test_value_accessors() {
    let string = Value::StringLit("\"v\"".to_string());
    let int = Value::IntLit(4);
    let float = Value::FloatLit(4.5);
    let object = Value::Object(Program::new(vec![Statement::new("o", None, vec![])]));

    assert_eq!(string.get_value_type(), ValueType::String);
    assert_eq!(string.as_string_literal(), Some("\"v\""));
    assert_eq!(string.unquoted(), Some("v"));
    assert_eq!(string.as_int(), None);

    assert_eq!(int.get_value_type(), ValueType::Int);
    assert_eq!(int.as_int(), Some(4));
    assert_eq!(int.as_float(), None);

    assert_eq!(float.get_value_type(), ValueType::Float);
    assert_eq!(float.as_float(), Some(4.5));

    assert_eq!(object.get_value_type(), ValueType::Object);
    assert_eq!(object.as_object().map(Program::len), Some(1));
    assert_eq!(object.unquoted(), None);
}

#[test]
fn test_program_lookup() {
    let program = Program::new(vec![
        Statement::new("a", None, vec![Value::IntLit(1)]),
        Statement::new("b", None, vec![]),
        Statement::new("a", None, vec![Value::IntLit(2)]),
    ]);

    assert_eq!(program.len(), 3);
    assert!(!program.is_empty());
    assert_eq!(program.get("a").unwrap().values, vec![Value::IntLit(1)]);
    assert!(program.get("missing").is_none());

    let keys: Vec<&str> = (&program).into_iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["a", "b", "a"]);
    assert!(Program::default().is_empty());
}
