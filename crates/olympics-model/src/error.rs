use thiserror::Error;

/// A categorical column held a value outside its vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// A filter value could not be parsed into its concrete type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid selection '{value}': {reason}")]
pub struct ParseSelectionError {
    pub value: String,
    pub reason: String,
}
