//! Error types for parsing, accessing and serializing JSON trees.

use thiserror::Error;

use crate::value::ValueType;

/// Errors that can occur while parsing text or operating on a [`Value`](crate::Value).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// The input text is not a single well-formed JSON value.
    /// `offset` is the byte position of the cursor when the error was detected.
    #[error("json parse error at offset {offset}: {message}")]
    Parse { offset: usize, message: String },

    /// The operation is not valid for the node's current variant.
    #[error("json type error: {0}")]
    Type(String),

    /// Negative array index, or an erase at or past the end of an array.
    #[error("index {index} out of range for array of length {len}")]
    OutOfRange { index: i64, len: usize },
}

impl JsonError {
    pub(crate) fn parse(offset: usize, message: impl Into<String>) -> Self {
        JsonError::Parse {
            offset,
            message: message.into(),
        }
    }

    /// A typed accessor asked for `requested` but the node holds `actual`.
    pub(crate) fn mismatch(requested: ValueType, actual: ValueType) -> Self {
        JsonError::Type(format!(
            "trying to access {requested} value from a {actual} JSON node"
        ))
    }

    /// A container operation was invoked on a node of the wrong variant.
    pub(crate) fn unsupported(operation: &str, actual: ValueType) -> Self {
        JsonError::Type(format!("{operation} is not supported on a {actual} JSON node"))
    }

    pub(crate) fn indeterminate() -> Self {
        JsonError::Type(
            "indeterminate value: accessing a non-existent member or element creates an \
             unset node, which cannot be serialized"
                .to_string(),
        )
    }

    /// Whether this is a [`JsonError::Parse`].
    pub fn is_parse(&self) -> bool {
        matches!(self, JsonError::Parse { .. })
    }

    /// Whether this is a [`JsonError::Type`].
    pub fn is_type(&self) -> bool {
        matches!(self, JsonError::Type(_))
    }

    /// Whether this is a [`JsonError::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, JsonError::OutOfRange { .. })
    }
}

/// Convenience alias used throughout jsontree.
pub type Result<T> = std::result::Result<T, JsonError>;
