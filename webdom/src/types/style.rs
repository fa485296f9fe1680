use super::Color;

/// Inline style declarations for an element.
///
/// Only declarations that were explicitly set are serialized; an empty style
/// produces no `style` attribute at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn foreground(mut self, color: impl Into<Color>) -> Self {
        self.foreground = Some(color.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.foreground.is_none()
    }

    /// Declarations in CSS text form, e.g. `background-color: #fff`.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(bg) = &self.background {
            decls.push(format!("background-color: {bg}"));
        }
        if let Some(fg) = &self.foreground {
            decls.push(format!("color: {fg}"));
        }
        decls.join("; ")
    }
}
