//! Error types for the button boundary.

use thiserror::Error;

/// A prop that does not match its documented type or shape.
///
/// These are advisory: they are logged and rendering continues, unless the
/// config is strict, in which case the input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropTypeError {
    /// A required prop is absent or null.
    #[error("required prop '{name}' was not specified")]
    MissingRequired {
        /// Prop name.
        name: &'static str,
    },

    /// A prop value has the wrong JSON type.
    #[error("invalid prop '{name}' of type '{found}', expected {expected}")]
    InvalidType {
        /// Prop name.
        name: &'static str,
        /// JSON type that was supplied.
        found: &'static str,
        /// Human-readable expected type.
        expected: &'static str,
    },

    /// An enumerated prop has a value outside its set.
    #[error("invalid prop '{name}' of value '{value}', expected one of {expected:?}")]
    NotOneOf {
        /// Prop name.
        name: &'static str,
        /// The rejected value.
        value: String,
        /// The accepted values.
        expected: &'static [&'static str],
    },

    /// The background color would not be understood by a browser.
    #[error("prop 'backgroundColor' value '{value}' is not a recognized CSS color")]
    UnrecognizedColor {
        /// The raw color string.
        value: String,
    },

    /// A pass-through value that has no attribute form (array or object).
    #[error("prop '{name}' has a value of type '{found}' that cannot be forwarded as an attribute")]
    UnsupportedValue {
        /// Prop name.
        name: String,
        /// JSON type that was supplied.
        found: &'static str,
    },

    /// A pass-through name that cannot be written as an HTML attribute.
    #[error("prop {name:?} is not a valid attribute name and will not be forwarded")]
    InvalidAttributeName {
        /// The rejected name.
        name: String,
    },

    /// A pass-through attribute that the button owns and will not forward.
    #[error("prop '{name}' is owned by the button and will not be forwarded")]
    ReservedAttribute {
        /// Attribute name.
        name: String,
    },
}

/// Errors returned when turning external input into button properties.
#[derive(Debug, Error)]
pub enum ButtonError {
    /// The label is the one prop the button cannot render without.
    #[error("button label is required")]
    MissingLabel,

    /// Args must be a JSON object.
    #[error("button args must be an object, got {0}")]
    NotAnObject(&'static str),

    /// An advisory finding promoted to an error by strict validation.
    #[error(transparent)]
    Prop(PropTypeError),

    /// The args text was not valid JSON.
    #[error("invalid args JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<PropTypeError> for ButtonError {
    fn from(err: PropTypeError) -> Self {
        match err {
            PropTypeError::MissingRequired { name: "label" } => Self::MissingLabel,
            other => Self::Prop(other),
        }
    }
}

/// JSON type name of a value, for messages.
pub(crate) fn json_type(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
