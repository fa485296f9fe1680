pub mod element;
pub mod event;
pub mod focus;
pub mod render;
pub mod types;

pub use element::{find_element, is_boolean_attr, is_valid_attr_name, AttrValue, Attributes, Content, Element};
pub use event::{Event, Handler, Key, Modifiers, MouseButton};
pub use focus::{tab_order, FocusState};
pub use render::to_html;
pub use types::*;
