use super::{AttrValue, Attributes, Content};
use crate::event::{Event, Handler};
use crate::types::Style;

#[derive(Clone)]
pub struct Element {
    pub tag: String,

    // Content
    pub content: Content,

    // Visual
    /// Class tokens in output order.
    pub classes: Vec<String>,
    pub style: Style,

    // Markup attributes other than `class` and `style`
    pub attributes: Attributes,

    // Interaction
    /// Event handlers keyed by DOM event name, in registration order.
    pub handlers: Vec<(String, Handler)>,
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let handlers: Vec<&str> = self.handlers.iter().map(|(n, _)| n.as_str()).collect();
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("content", &self.content)
            .field("classes", &self.classes)
            .field("style", &self.style)
            .field("attributes", &self.attributes)
            .field("handlers", &handlers)
            .finish()
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            content: Content::None,
            classes: Vec::new(),
            style: Style::default(),
            attributes: Attributes::new(),
            handlers: Vec::new(),
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    // Identity
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id.into())
    }

    pub fn get_id(&self) -> Option<&str> {
        self.attributes.get("id").and_then(AttrValue::as_text)
    }

    // Visual
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Space-joined class list, as it appears in the `class` attribute.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Set `tabindex`. `0` places the element in the default tab sequence.
    pub fn tab_index(self, index: i32) -> Self {
        self.attr("tabindex", index)
    }

    /// Parsed `tabindex`, if present and numeric.
    pub fn get_tab_index(&self) -> Option<i32> {
        self.attributes
            .get("tabindex")
            .and_then(AttrValue::as_text)
            .and_then(|s| s.trim().parse().ok())
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self.attributes.get("disabled"), Some(AttrValue::Bool(true)))
    }

    // Interaction
    /// Register a handler for `event`. A later handler for the same event
    /// replaces the earlier one.
    pub fn on(mut self, event: impl Into<String>, handler: Handler) -> Self {
        let event = event.into();
        match self.handlers.iter_mut().find(|(n, _)| *n == event) {
            Some((_, existing)) => *existing = handler,
            None => self.handlers.push((event, handler)),
        }
        self
    }

    pub fn handler(&self, event: &str) -> Option<&Handler> {
        self.handlers
            .iter()
            .find(|(n, _)| n == event)
            .map(|(_, h)| h)
    }

    /// Invoke the handler registered for this event's name.
    /// Returns true if a handler ran.
    pub fn dispatch(&self, event: &Event) -> bool {
        if self.is_disabled() {
            log::debug!("dropping {} on disabled <{}>", event.name(), self.tag);
            return false;
        }
        match self.handler(event.name()) {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    /// Visible text of this element and its descendants.
    pub fn text_content(&self) -> String {
        self.content.text()
    }
}
