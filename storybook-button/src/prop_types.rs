//! Declarative prop documentation and the advisory checker built on it.
//!
//! [`BUTTON_PROP_TYPES`] describes every prop the button understands. The
//! checker compares raw args (or built properties) against that table and
//! returns findings; it never blocks rendering by itself. What happens to the
//! findings is decided by [`RenderConfig::report`](crate::RenderConfig::report).

use serde_json::{Map, Value};
use webdom::{Color, is_valid_attr_name};

use crate::error::{PropTypeError, json_type};
use crate::props::{ButtonProperties, Size};

/// Pass-through names the button will not forward.
pub const RESERVED_ATTRIBUTES: &[&str] = &["class", "style"];

/// Shape of a prop value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    Bool,
    String,
    OneOf(&'static [&'static str]),
    /// A callback. Cannot be supplied through JSON args.
    Func,
}

impl PropKind {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::String => "string",
            Self::OneOf(_) => "one of the listed values",
            Self::Func => "function",
        }
    }
}

/// Documentation for one prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropType {
    /// Name as it appears in args.
    pub name: &'static str,
    pub kind: PropKind,
    pub required: bool,
    /// Default in args notation, `None` for absent.
    pub default: Option<&'static str>,
    pub description: &'static str,
}

impl PropType {
    /// Check one non-null value against this prop's kind.
    pub fn check(&self, value: &Value) -> Option<PropTypeError> {
        let invalid_type = || PropTypeError::InvalidType {
            name: self.name,
            found: json_type(value),
            expected: self.kind.describe(),
        };

        match (self.kind, value) {
            (_, Value::Null) => None,
            (PropKind::Bool, Value::Bool(_)) => None,
            (PropKind::String, Value::String(_)) => None,
            (PropKind::OneOf(allowed), Value::String(s)) => {
                (!allowed.contains(&s.as_str())).then(|| PropTypeError::NotOneOf {
                    name: self.name,
                    value: s.clone(),
                    expected: allowed,
                })
            }
            _ => Some(invalid_type()),
        }
    }
}

pub const BUTTON_PROP_TYPES: &[PropType] = &[
    PropType {
        name: "primary",
        kind: PropKind::Bool,
        required: false,
        default: Some("false"),
        description: "Is this the principal call to action on the page?",
    },
    PropType {
        name: "backgroundColor",
        kind: PropKind::String,
        required: false,
        default: None,
        description: "What background color to use? Must pass color contrast testing.",
    },
    PropType {
        name: "size",
        kind: PropKind::OneOf(Size::NAMES),
        required: false,
        default: Some("medium"),
        description: "How large should the button be?",
    },
    PropType {
        name: "label",
        kind: PropKind::String,
        required: true,
        default: None,
        description: "Button contents. If an icon is used, a meaningful label needs to be attached to it.",
    },
    PropType {
        name: "onClick",
        kind: PropKind::Func,
        required: false,
        default: None,
        description: "Optional click handler. If a click handler is used, an equivalent keyboard handler must be used as well.",
    },
    PropType {
        name: "onKeyDown",
        kind: PropKind::Func,
        required: false,
        default: None,
        description: "Optional keyboard handler.",
    },
];

/// Look up the documentation for a prop.
pub fn prop_type(name: &str) -> Option<&'static PropType> {
    BUTTON_PROP_TYPES.iter().find(|p| p.name == name)
}

/// Check raw args against the prop table.
///
/// Documented props are checked for presence and shape. Everything else is
/// pass-through and only checked for being forwardable.
pub fn check_args(args: &Map<String, Value>) -> Vec<PropTypeError> {
    let mut findings = Vec::new();

    for prop in BUTTON_PROP_TYPES {
        match args.get(prop.name) {
            None | Some(Value::Null) if prop.required => {
                findings.push(PropTypeError::MissingRequired { name: prop.name });
            }
            None => {}
            Some(value) => findings.extend(prop.check(value)),
        }
    }

    if let Some(Value::String(color)) = args.get("backgroundColor") {
        findings.extend(check_color(&Color::new(color.as_str())));
    }

    for (name, value) in args {
        if prop_type(name).is_some() {
            continue;
        }
        if !is_valid_attr_name(name) {
            findings.push(PropTypeError::InvalidAttributeName { name: name.clone() });
        } else if RESERVED_ATTRIBUTES.contains(&name.as_str()) {
            findings.push(PropTypeError::ReservedAttribute { name: name.clone() });
        } else if value.is_array() || value.is_object() {
            findings.push(PropTypeError::UnsupportedValue {
                name: name.clone(),
                found: json_type(value),
            });
        }
    }

    findings
}

/// Check built properties. Only the parts a typed value can still get wrong
/// are covered: the color string and pass-through attribute names.
pub fn check_props(props: &ButtonProperties) -> Vec<PropTypeError> {
    let mut findings = Vec::new();

    if let Some(color) = &props.background_color {
        findings.extend(check_color(color));
    }

    for (name, _) in props.rest.attributes.iter() {
        if !is_valid_attr_name(name) {
            findings.push(PropTypeError::InvalidAttributeName {
                name: name.to_string(),
            });
        } else if RESERVED_ATTRIBUTES.contains(&name) {
            findings.push(PropTypeError::ReservedAttribute {
                name: name.to_string(),
            });
        }
    }

    findings
}

fn check_color(color: &Color) -> Option<PropTypeError> {
    // Empty means "no background", not a bad color.
    if color.is_empty() || color.is_recognized() {
        return None;
    }
    Some(PropTypeError::UnrecognizedColor {
        value: color.as_str().to_string(),
    })
}
