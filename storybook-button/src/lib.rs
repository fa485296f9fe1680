//! Button component for the component catalog.
//!
//! Renders a `<button>` description with three classes the catalog stylesheet
//! keys on: `storybook-button`, `storybook-button--{size}` and
//! `storybook-button--primary` or `storybook-button--secondary`.
//!
//! # Accessibility
//!
//! These are requirements on the page using the button; nothing here
//! checks them.
//!
//! - The background color must pass contrast testing, including hover and
//!   active states. <https://webaim.org/resources/contrastchecker/>
//! - An `on_click` must have an equivalent key press handler.
//! - The button carries `tabindex="0"` so it is reachable by keyboard.
//!
//! # Example
//!
//! ```
//! use storybook_button::{ButtonProperties, Size, render_button};
//!
//! let button = render_button(
//!     &ButtonProperties::new("Click me")
//!         .primary(true)
//!         .size(Size::Large)
//!         .background_color("#1ea7fd"),
//! );
//! assert_eq!(
//!     button.class_name(),
//!     "storybook-button storybook-button--large storybook-button--primary"
//! );
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod prop_types;
pub mod props;
pub mod render;

pub use args::ButtonArgs;
pub use config::{RenderConfig, ValidationMode};
pub use error::{ButtonError, PropTypeError};
pub use prop_types::{BUTTON_PROP_TYPES, PropKind, PropType};
pub use props::{BASE_CLASS, ButtonProperties, Mode, PassThrough, Size};
pub use render::{render_button, render_checked};
