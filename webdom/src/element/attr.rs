/// Value of a markup attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    /// Boolean attribute: present when `true`, omitted when `false`.
    Bool(bool),
}

impl AttrValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Bool(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Text(value.to_string())
    }
}

/// Whether `name` can be written as an HTML attribute name.
///
/// Rejects empty names and names containing whitespace, quotes, `>`, `/`,
/// `=` or control characters.
pub fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '>' | '/' | '=' | '<')
        })
}

/// HTML attributes whose presence alone means `true`.
const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "autofocus",
    "checked",
    "disabled",
    "hidden",
    "inert",
    "readonly",
    "required",
    "selected",
];

/// Whether `name` is an HTML boolean attribute. Any other attribute needs an
/// explicit value, so `aria-pressed="false"` must be written out as text.
pub fn is_boolean_attr(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES.contains(&name)
}

/// Attribute set that keeps first-insertion order.
///
/// Setting an existing name replaces its value in place, so later writers
/// override earlier ones without reordering the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut attrs = Attributes::new();
        attrs.set("type", "button");
        attrs.set("tabindex", 0);
        attrs.set("type", "submit");

        let names: Vec<_> = attrs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["type", "tabindex"]);
        assert_eq!(attrs.get("type"), Some(&AttrValue::from("submit")));
    }

    #[test]
    fn test_attr_names() {
        assert!(is_valid_attr_name("data-testid"));
        assert!(is_valid_attr_name("aria-pressed"));
        assert!(is_valid_attr_name("@click.prevent"));
        assert!(!is_valid_attr_name(""));
        assert!(!is_valid_attr_name("a b"));
        assert!(!is_valid_attr_name("x><script"));
        assert!(!is_valid_attr_name("a=b"));
        assert!(!is_valid_attr_name("it's"));
        assert!(!is_valid_attr_name("a\u{7}"));
    }

    #[test]
    fn test_boolean_attr_names() {
        assert!(is_boolean_attr("disabled"));
        assert!(!is_boolean_attr("aria-pressed"));
        assert!(!is_boolean_attr("data-active"));
    }

    #[test]
    fn test_remove() {
        let mut attrs = Attributes::new();
        attrs.set("disabled", true);
        assert_eq!(attrs.remove("disabled"), Some(AttrValue::Bool(true)));
        assert!(attrs.is_empty());
        assert_eq!(attrs.remove("disabled"), None);
    }
}
