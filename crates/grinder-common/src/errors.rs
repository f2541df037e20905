use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("config watch error: {0}")]
    WatchError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GrinderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Category of a broken configuration invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationKind {
    /// Negative bound, forbidden zero, min above max, or a value outside `[0, 1]`.
    Range,
    /// Value is not a member of its closed set.
    Membership,
    /// Required string or list is empty.
    Emptiness,
    /// Value is only invalid given a sibling flag.
    Conditional,
}

/// One step on the way from the config root to a failing section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(&'static str),
    Index(usize),
}

/// A single configuration failure.
///
/// Built at the leaf that detected it and annotated with path segments
/// as it travels back up to the root, so the rendered message reads like
/// `accounts[0]: channelID is required`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    kind: ViolationKind,
    path: Vec<PathSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    message: String,
}

impl ValidationError {
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: Vec::new(),
            field: None,
            value: None,
            message: message.into(),
        }
    }

    pub fn range(message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Range, message)
    }

    pub fn membership(message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Membership, message)
    }

    pub fn emptiness(message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Emptiness, message)
    }

    pub fn conditional(message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Conditional, message)
    }

    /// Name the leaf field that holds the bad value.
    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// Attach the offending value.
    pub fn with_value(mut self, value: impl ToString) -> Self {
        self.value = Some(value.to_string());
        self
    }

    /// Prepend a path segment; called once per level while unwinding.
    pub fn within(mut self, segment: PathSegment) -> Self {
        self.path.insert(0, segment);
        self
    }

    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    pub fn field(&self) -> Option<&'static str> {
        self.field
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Dotted locator including the leaf field, e.g. `accounts[0].channelID`.
    pub fn location(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            match segment {
                PathSegment::Field(name) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(name);
                }
                PathSegment::Index(index) => {
                    out.push_str(&format!("[{index}]"));
                }
            }
        }
        if let Some(field) = self.field {
            if !out.is_empty() {
                out.push('.');
            }
            out.push_str(field);
        }
        out
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.path {
            match segment {
                PathSegment::Field(name) => {
                    if !first {
                        f.write_str(": ")?;
                    }
                    f.write_str(name)?;
                    first = false;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        if !self.path.is_empty() {
            f.write_str(": ")?;
        }
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}
