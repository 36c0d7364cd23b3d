use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid resource definition: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid resource definition: {0}")]
    Json5(#[from] json5::Error),
    #[error("missing required field 'name'")]
    MissingName,
    #[error("missing required field 'type'")]
    MissingType,
}

/// Usage annotation controlling how a row's text is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Usage {
    #[default]
    Used,
    NotUsed,
    Todo,
    Optional,
}

impl Usage {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "used" => Some(Self::Used),
            "not-used" => Some(Self::NotUsed),
            "todo" => Some(Self::Todo),
            "optional" => Some(Self::Optional),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Used => "used",
            Self::NotUsed => "not-used",
            Self::Todo => "todo",
            Self::Optional => "optional",
        }
    }
}

impl From<String> for Usage {
    fn from(value: String) -> Self {
        Usage::from_token(value.trim()).unwrap_or_default()
    }
}

impl From<Usage> for String {
    fn from(value: Usage) -> Self {
        value.as_str().to_string()
    }
}

/// Value set binding for a coded element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Binding {
    pub strength: String,
    pub value_set: String,
    pub url: String,
}

/// An extension attached to an element. Omitted `type` defaults to `Extension`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtensionNode {
    pub name: String,
    pub url: String,
    pub context: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub cardinality: String,
    pub description: String,
}

/// One element of a resource definition. The root of the tree is a
/// `RecordNode` as well; `elements` holds its children in display order.
///
/// The tree is trusted to be acyclic. Ownership makes a cycle impossible to
/// build from safe code, so no check is performed during layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordNode {
    pub name: String,
    pub flags: Vec<String>,
    pub cardinality: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_ref: Option<String>,
    pub description: String,
    pub usage: Usage,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<Binding>,
    #[serde(alias = "children")]
    pub elements: Vec<RecordNode>,
    pub extensions: Vec<ExtensionNode>,
}

impl RecordNode {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            ..Default::default()
        }
    }

    pub fn with_cardinality(mut self, cardinality: impl Into<String>) -> Self {
        self.cardinality = cardinality.into();
        self
    }

    pub fn with_child(mut self, child: RecordNode) -> Self {
        self.elements.push(child);
        self
    }

    pub fn with_extension(mut self, extension: ExtensionNode) -> Self {
        self.extensions.push(extension);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.elements.is_empty()
    }

    /// Number of rows the tree flattens into: every node plus every extension.
    pub fn row_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1 + node.extensions.len();
            stack.extend(node.elements.iter());
        }
        count
    }

    /// Checks the fields the layout engine relies on being present.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::MissingName);
        }
        if self.type_name.trim().is_empty() {
            return Err(ModelError::MissingType);
        }
        Ok(())
    }
}

impl Default for ExtensionNode {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            context: String::new(),
            type_name: "Extension".to_string(),
            cardinality: String::new(),
            description: String::new(),
        }
    }
}

impl ExtensionNode {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Parses and validates a resource definition. Strict JSON is tried first;
/// JSON5 (comments, trailing commas, unquoted keys) is accepted as a fallback.
pub fn parse_resource(input: &str) -> Result<RecordNode, ModelError> {
    let resource: RecordNode = match serde_json::from_str(input) {
        Ok(resource) => resource,
        Err(json_err) => match json5::from_str(input) {
            Ok(resource) => resource,
            Err(_) => return Err(ModelError::Json(json_err)),
        },
    };
    resource.validate()?;
    Ok(resource)
}
