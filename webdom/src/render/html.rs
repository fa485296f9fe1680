use std::fmt::{self, Write};

use crate::element::{is_valid_attr_name, AttrValue, Content, Element};

/// Serialize an element tree to HTML.
///
/// `class` and `style` are written first, from the element's class list and
/// inline style, and only when non-empty. Handlers have no markup form and
/// are not written. Attributes whose name is not a valid HTML attribute name
/// are skipped.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, root).expect("writing to a String cannot fail");
    out
}

fn write_element(out: &mut String, element: &Element) -> fmt::Result {
    write!(out, "<{}", element.tag)?;

    if !element.classes.is_empty() {
        write!(out, " class=\"{}\"", escape_attr(&element.class_name()))?;
    }
    if !element.style.is_empty() {
        write!(out, " style=\"{}\"", escape_attr(&element.style.to_css()))?;
    }

    for (name, value) in element.attributes.iter() {
        if name == "class" || name == "style" {
            log::warn!("<{}>: ignoring raw '{name}' attribute", element.tag);
            continue;
        }
        if !is_valid_attr_name(name) {
            log::warn!("<{}>: skipping invalid attribute name {name:?}", element.tag);
            continue;
        }
        match value {
            AttrValue::Text(text) => write!(out, " {name}=\"{}\"", escape_attr(text))?,
            AttrValue::Bool(true) => write!(out, " {name}")?,
            AttrValue::Bool(false) => {}
        }
    }
    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_text(text)),
        Content::Children(children) => {
            for child in children {
                write_element(out, child)?;
            }
        }
    }

    write!(out, "</{}>", element.tag)
}

pub fn escape_text(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
