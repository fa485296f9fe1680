//! The input boundary: loosely typed args in, resolved properties out.
//!
//! A catalog hands the button a JSON object of args. Defaults are applied
//! here, once, so the renderer only ever sees complete properties.

use serde::Deserialize;
use serde_json::{Map, Value};
use webdom::{Color, is_boolean_attr};

use crate::config::{RenderConfig, ValidationMode};
use crate::error::{ButtonError, PropTypeError, json_type};
use crate::prop_types::{self, BUTTON_PROP_TYPES};
use crate::props::{ButtonProperties, Size};

/// Button args before defaults are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonArgs {
    pub primary: Option<bool>,
    pub background_color: Option<String>,
    pub size: Option<String>,
    pub label: Option<String>,

    /// Every other key, forwarded verbatim.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl ButtonArgs {
    /// Parse args from JSON text. See [`ButtonArgs::from_value`].
    pub fn from_json(json: &str, config: &RenderConfig) -> Result<Self, ButtonError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value, config)
    }

    /// Check args against the prop table, then deserialize them.
    ///
    /// Documented props whose value has the wrong shape are dropped, so they
    /// fall back to their defaults instead of failing the whole render.
    /// Strict configs reject the args on the first finding instead.
    pub fn from_value(value: Value, config: &RenderConfig) -> Result<Self, ButtonError> {
        let mut map = match value {
            Value::Object(map) => map,
            other => return Err(ButtonError::NotAnObject(json_type(&other))),
        };

        if config.is_checked() {
            let findings = prop_types::check_args(&map)
                .into_iter()
                // Reported by `resolve`, which owns the label requirement.
                .filter(|f| !matches!(f, PropTypeError::MissingRequired { name: "label" }))
                .collect();
            config.report(findings)?;
        }

        for prop in BUTTON_PROP_TYPES {
            if map.get(prop.name).is_some_and(|v| prop.check(v).is_some()) {
                log::debug!("dropping malformed '{}'", prop.name);
                map.remove(prop.name);
            }
        }

        Ok(serde_json::from_value(Value::Object(map))?)
    }

    /// Substitute defaults and build the properties value.
    pub fn resolve(self, config: &RenderConfig) -> Result<ButtonProperties, ButtonError> {
        let label = self.label.ok_or(ButtonError::MissingLabel)?;

        let size = match self.size.as_deref() {
            None => Size::default(),
            Some(raw) => match raw.parse::<Size>() {
                Ok(size) => size,
                Err(err) if config.validation == ValidationMode::Strict => return Err(err.into()),
                Err(err) => {
                    if config.is_checked() {
                        log::warn!("{}: {err}, using '{}'", config.name, Size::default());
                    }
                    Size::default()
                }
            },
        };

        let mut props = ButtonProperties::new(label)
            .primary(self.primary.unwrap_or(false))
            .size(size);

        // Null and empty colors both mean "no inline background".
        props.background_color = self
            .background_color
            .filter(|c| !c.trim().is_empty())
            .map(Color::from);

        // Outside HTML boolean attributes, `false` is a value and not an
        // absence, so `aria-pressed: false` is written as text.
        for (name, value) in self.rest {
            match value {
                Value::String(s) => props.rest.attributes.set(name, s),
                Value::Bool(b) if is_boolean_attr(&name) => props.rest.attributes.set(name, b),
                Value::Bool(b) => props.rest.attributes.set(name, b.to_string()),
                Value::Number(n) => props.rest.attributes.set(name, n.to_string()),
                Value::Null => {}
                other => {
                    log::debug!("not forwarding '{name}' ({})", json_type(&other));
                }
            }
        }

        Ok(props)
    }
}

impl ButtonProperties {
    /// Parse JSON args and resolve them in one step.
    pub fn from_json(json: &str, config: &RenderConfig) -> Result<Self, ButtonError> {
        ButtonArgs::from_json(json, config)?.resolve(config)
    }
}
