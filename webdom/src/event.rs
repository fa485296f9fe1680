use std::sync::Arc;

/// Callback attached to an element for a named event.
pub type Handler = Arc<dyn Fn(&Event) + Send + Sync>;

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Pointer click (or keyboard activation of a button)
    Click {
        target: Option<String>,
        button: MouseButton,
        modifiers: Modifiers,
    },
    /// Element gained focus
    Focus { target: Option<String> },
    /// Element lost focus
    Blur { target: Option<String> },
}

impl Event {
    pub fn click() -> Self {
        Self::Click {
            target: None,
            button: MouseButton::Left,
            modifiers: Modifiers::new(),
        }
    }

    pub fn key(key: Key) -> Self {
        Self::Key {
            target: None,
            key,
            modifiers: Modifiers::new(),
        }
    }

    /// DOM event name used to look up handlers (`click`, `keydown`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Key { .. } => "keydown",
            Self::Click { .. } => "click",
            Self::Focus { .. } => "focus",
            Self::Blur { .. } => "blur",
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    BackTab,
}

impl Key {
    /// Keys that activate a focused button.
    pub fn activates(&self) -> bool {
        matches!(self, Self::Enter | Self::Char(' '))
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
