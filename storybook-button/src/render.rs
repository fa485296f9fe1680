//! Button rendering.

use webdom::{Element, Style, is_valid_attr_name};

use crate::config::RenderConfig;
use crate::prop_types::{self, RESERVED_ATTRIBUTES};
use crate::props::{BASE_CLASS, ButtonProperties};

/// Render a button.
///
/// The class list is always `storybook-button`, the size class and the mode
/// class, in that order. Pass-through attributes and handlers are applied
/// last, so they may override `type` and `tabindex`, but never `class` or
/// `style`. Names that are not valid HTML attribute names are dropped.
pub fn render_button(props: &ButtonProperties) -> Element {
    let mut button = Element::button()
        .attr("type", "button")
        .tab_index(0)
        .class(BASE_CLASS)
        .class(props.size.class())
        .class(props.mode().class());

    if let Some(color) = props.background_color.as_ref().filter(|c| !c.is_empty()) {
        button = button.style(Style::new().background(color.clone()));
    }

    if let Some(handler) = &props.on_click {
        button = button.on("click", handler.clone());
    }
    if let Some(handler) = &props.on_key_down {
        button = button.on("keydown", handler.clone());
    }

    for (name, value) in props.rest.attributes.iter() {
        if RESERVED_ATTRIBUTES.contains(&name) {
            log::warn!("button '{}': not forwarding reserved '{name}'", props.label);
            continue;
        }
        if !is_valid_attr_name(name) {
            log::warn!("button '{}': not forwarding invalid name {name:?}", props.label);
            continue;
        }
        button = button.attr(name, value.clone());
    }
    for (event, handler) in &props.rest.handlers {
        button = button.on(event.as_str(), handler.clone());
    }

    button.text(props.label.as_str())
}

/// Run the prop checker when enabled, then render.
///
/// Findings are only logged here; rendering always proceeds.
pub fn render_checked(props: &ButtonProperties, config: &RenderConfig) -> Element {
    if config.is_checked() {
        for finding in prop_types::check_props(props) {
            log::warn!("{}: {finding}", config.name);
        }
    }
    render_button(props)
}

impl ButtonProperties {
    pub fn render(&self) -> Element {
        render_button(self)
    }
}
