use super::ast::Program;

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum ValueType {
    String,
    Int,
    Float,
    Object,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Raw source text of the literal, enclosing quotes included, escapes
    /// left as written.
    StringLit(String),
    IntLit(i64),
    FloatLit(f64),
    Object(Program),
}

impl Value {
    pub fn get_value_type(&self) -> ValueType {
        match self {
            Value::StringLit(_) => ValueType::String,
            Value::IntLit(_) => ValueType::Int,
            Value::FloatLit(_) => ValueType::Float,
            Value::Object(_) => ValueType::Object,
        }
    }

    pub fn as_string_literal(&self) -> Option<&str> {
        match self {
            Value::StringLit(text) => Some(text),
            _ => None,
        }
    }

    /// The string literal's text between its quotes. Escapes are not processed.
    pub fn unquoted(&self) -> Option<&str> {
        self.as_string_literal()
            .and_then(|text| text.strip_prefix('"'))
            .and_then(|text| text.strip_suffix('"'))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::IntLit(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::FloatLit(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Program> {
        match self {
            Value::Object(program) => Some(program),
            _ => None,
        }
    }
}
