use crate::settings::{FieldKind, WebField};

/// Error raised when a keyword or value cannot be applied to a [`WebSettings`](crate::WebSettings)
/// record. This is the only error kind the crate produces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("'{0}' is an invalid keyword argument for web settings")]
    UnknownField(String),

    #[error("{field} must be {expected}, not {found}")]
    WrongType {
        field: WebField,
        expected: FieldKind,
        found: &'static str,
    },

    #[error("{field} value {value} is out of range for a C int")]
    OutOfRange { field: WebField, value: i128 },

    #[error("argument for {0} given more than once")]
    Duplicate(WebField),

    #[error("invalid keyword object: {0}")]
    InvalidJson(String),

    #[error("null pointer passed as argument")]
    NullPointer,

    #[error("argument is not valid UTF-8")]
    InvalidUtf8,
}
