//! Button properties.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use webdom::{AttrValue, Attributes, Color, Event, Handler};

use crate::error::PropTypeError;

/// Class shared by every button.
pub const BASE_CLASS: &str = "storybook-button";

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    /// Accepted names, in display order.
    pub const NAMES: &'static [&'static str] = &["small", "medium", "large"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Size-qualified class, e.g. `storybook-button--large`.
    pub fn class(self) -> String {
        format!("{BASE_CLASS}--{}", self.as_str())
    }
}

impl FromStr for Size {
    type Err = PropTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(PropTypeError::NotOneOf {
                name: "size",
                value: other.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual role of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The principal call to action.
    Primary,
    Secondary,
}

impl Mode {
    pub fn from_primary(primary: bool) -> Self {
        if primary { Self::Primary } else { Self::Secondary }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "storybook-button--primary",
            Self::Secondary => "storybook-button--secondary",
        }
    }
}

/// Caller-supplied attributes and handlers the button does not model.
///
/// Everything here is attached to the rendered control after the button's
/// own attributes, in insertion order.
#[derive(Clone, Default)]
pub struct PassThrough {
    pub attributes: Attributes,
    /// Handlers keyed by DOM event name.
    pub handlers: Vec<(String, Handler)>,
}

impl fmt::Debug for PassThrough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers: Vec<&str> = self.handlers.iter().map(|(n, _)| n.as_str()).collect();
        f.debug_struct("PassThrough")
            .field("attributes", &self.attributes)
            .field("handlers", &handlers)
            .finish()
    }
}

/// Properties for a single button render.
///
/// Built fresh for each render and not modified by it. The label is the only
/// required value, so it is the constructor argument; everything else starts
/// at its default.
#[derive(Clone)]
pub struct ButtonProperties {
    /// Is this the principal call to action on the page?
    pub primary: bool,

    /// Background color. Must pass color contrast testing against the label.
    /// `None` or an empty string means no inline style.
    pub background_color: Option<Color>,

    pub size: Size,

    /// Button contents. If an icon is used, a meaningful label still needs to
    /// be attached to it.
    pub label: String,

    /// Click handler. Provide an equivalent keyboard handler alongside it.
    pub on_click: Option<Handler>,

    pub on_key_down: Option<Handler>,

    pub rest: PassThrough,
}

impl fmt::Debug for ButtonProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonProperties")
            .field("primary", &self.primary)
            .field("background_color", &self.background_color)
            .field("size", &self.size)
            .field("label", &self.label)
            .field("on_click", &self.on_click.is_some())
            .field("on_key_down", &self.on_key_down.is_some())
            .field("rest", &self.rest)
            .finish()
    }
}

impl ButtonProperties {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            primary: false,
            background_color: None,
            size: Size::default(),
            label: label.into(),
            on_click: None,
            on_key_down: None,
            rest: PassThrough::default(),
        }
    }

    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    pub fn background_color(mut self, color: impl Into<Color>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn on_click<F>(mut self, f: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(f));
        self
    }

    pub fn on_key_down<F>(mut self, f: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.on_key_down = Some(Arc::new(f));
        self
    }

    /// Add a pass-through attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.rest.attributes.set(name, value);
        self
    }

    /// Add a pass-through handler for a DOM event name (`focus`, `mouseenter`, ...).
    pub fn on<F>(mut self, event: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        let event = event.into();
        let handler: Handler = Arc::new(f);
        match self.rest.handlers.iter_mut().find(|(n, _)| *n == event) {
            Some((_, existing)) => *existing = handler,
            None => self.rest.handlers.push((event, handler)),
        }
        self
    }

    pub fn mode(&self) -> Mode {
        Mode::from_primary(self.primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let props = ButtonProperties::new("Cancel");
        assert!(!props.primary);
        assert_eq!(props.size, Size::Medium);
        assert!(props.background_color.is_none());
        assert!(props.on_click.is_none());
        assert!(props.on_key_down.is_none());
        assert!(props.rest.attributes.is_empty());
        assert_eq!(props.mode(), Mode::Secondary);
    }

    #[test]
    fn test_size_parse() {
        assert_eq!("small".parse::<Size>(), Ok(Size::Small));
        assert_eq!("large".parse::<Size>(), Ok(Size::Large));
        assert!(matches!(
            "huge".parse::<Size>(),
            Err(PropTypeError::NotOneOf { name: "size", .. })
        ));
        // Names are case-sensitive.
        assert!("Large".parse::<Size>().is_err());
    }

    #[test]
    fn test_size_class() {
        assert_eq!(Size::Small.class(), "storybook-button--small");
        assert_eq!(Size::default().class(), "storybook-button--medium");
    }

    #[test]
    fn test_pass_through_handler_replaced() {
        let props = ButtonProperties::new("x").on("focus", |_| {}).on("focus", |_| {});
        assert_eq!(props.rest.handlers.len(), 1);
    }
}
