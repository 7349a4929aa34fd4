use super::values::Value;

/// `key metadata? value (, value)*`
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub key: String,
    pub metadata: Option<Metadata>,
    pub values: Vec<Value>,
}

impl Statement {
    pub fn new(key: impl Into<String>, metadata: Option<Metadata>, values: Vec<Value>) -> Self {
        Statement {
            key: key.into(),
            metadata,
            values,
        }
    }

    /// The metadata identifier, or `""` when none was given.
    pub fn id(&self) -> &str {
        self.metadata.as_ref().map_or("", Metadata::id)
    }

    /// The metadata template name, or `""` when none was given.
    pub fn template(&self) -> &str {
        self.metadata.as_ref().map_or("", Metadata::template)
    }
}

/// Identifier and/or template reference attached to a statement key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Metadata {
    /// `key id`
    IdOnly(String),
    /// `key template: name`
    TemplateOnly(String),
    /// `key id, template: name`
    IdAndTemplate { id: String, template: String },
}

impl Metadata {
    pub fn id(&self) -> &str {
        match self {
            Metadata::IdOnly(id) | Metadata::IdAndTemplate { id, .. } => id,
            Metadata::TemplateOnly(_) => "",
        }
    }

    pub fn template(&self) -> &str {
        match self {
            Metadata::TemplateOnly(template) | Metadata::IdAndTemplate { template, .. } => template,
            Metadata::IdOnly(_) => "",
        }
    }
}
