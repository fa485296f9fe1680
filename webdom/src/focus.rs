use crate::element::{Content, Element};
use crate::event::{Event, Key};

/// Tags that take part in the tab sequence without an explicit `tabindex`.
const NATIVELY_FOCUSABLE: &[&str] = &["button", "input", "select", "textarea"];

/// Tracks which element is currently focused and moves focus with Tab.
///
/// Moving focus dispatches `blur` to the element losing focus and then
/// `focus` to the element gaining it.
///
/// Focus is tracked by position in [`tab_order`], so the tree can be
/// re-rendered between calls as long as its shape stays the same.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<usize>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the focused element in the tab order.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// The currently focused element, if any.
    pub fn focused_element<'a>(&self, root: &'a Element) -> Option<&'a Element> {
        tab_order(root).get(self.focused?).copied()
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self, root: &Element) -> bool {
        let Some(index) = self.focused.take() else {
            return false;
        };
        if let Some(previous) = tab_order(root).get(index) {
            previous.dispatch(&Event::Blur {
                target: previous.get_id().map(String::from),
            });
        }
        true
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the new position if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<usize> {
        let len = tab_order(root).len();
        if len == 0 {
            return None;
        }

        let next = match self.focused {
            Some(i) if i < len => (i + 1) % len,
            _ => 0,
        };
        self.move_to(root, next)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the new position if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<usize> {
        let len = tab_order(root).len();
        if len == 0 {
            return None;
        }

        let prev = match self.focused {
            Some(0) => len - 1,
            Some(i) if i < len => i - 1,
            _ => len - 1,
        };
        self.move_to(root, prev)
    }

    fn move_to(&mut self, root: &Element, index: usize) -> Option<usize> {
        if self.focused == Some(index) {
            return None;
        }
        self.blur(root);

        if let Some(next) = tab_order(root).get(index) {
            next.dispatch(&Event::Focus {
                target: next.get_id().map(String::from),
            });
        }
        self.focused = Some(index);
        Some(index)
    }

    /// Route a key press: Tab/BackTab move focus, anything else is dispatched
    /// to the focused element as `keydown`. Enter and Space on a focused
    /// `<button>` also dispatch `click`, the way a browser activates buttons.
    ///
    /// Returns true if a `keydown` or `click` handler ran.
    pub fn handle_key(&mut self, root: &Element, key: Key) -> bool {
        match key {
            Key::Tab => {
                self.focus_next(root);
                return false;
            }
            Key::BackTab => {
                self.focus_prev(root);
                return false;
            }
            _ => {}
        }

        let Some(target) = self.focused_element(root) else {
            log::debug!("key {key:?} with nothing focused");
            return false;
        };

        let mut handled = target.dispatch(&Event::key(key));
        if target.tag == "button" && key.activates() {
            handled |= target.dispatch(&Event::click());
        }
        handled
    }
}

/// Focusable elements in tab order.
///
/// Elements with a positive `tabindex` come first, ascending, ties in
/// document order. Then elements with `tabindex="0"` or a natively focusable
/// tag, in document order. Negative `tabindex` and disabled elements are
/// skipped.
pub fn tab_order(root: &Element) -> Vec<&Element> {
    let mut positive = Vec::new();
    let mut natural = Vec::new();
    collect_focusable_recursive(root, &mut positive, &mut natural);

    positive.sort_by_key(|(index, _)| *index);
    positive
        .into_iter()
        .map(|(_, el)| el)
        .chain(natural)
        .collect()
}

fn collect_focusable_recursive<'a>(
    element: &'a Element,
    positive: &mut Vec<(i32, &'a Element)>,
    natural: &mut Vec<&'a Element>,
) {
    if !element.is_disabled() {
        match element.get_tab_index() {
            Some(i) if i > 0 => positive.push((i, element)),
            Some(0) => natural.push(element),
            Some(_) => {}
            None if NATIVELY_FOCUSABLE.contains(&element.tag.as_str()) => natural.push(element),
            None => {}
        }
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_recursive(child, positive, natural);
        }
    }
}
