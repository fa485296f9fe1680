//! Renders the catalog stories for the button and prints their HTML.
//!
//! Run with `cargo run -p storybook-button --example stories`.

use simplelog::{ColorChoice, Config, LevelFilter, TerminalMode, TermLogger};
use storybook_button::{
    BUTTON_PROP_TYPES, ButtonError, ButtonProperties, RenderConfig, render_checked,
};
use webdom::to_html;

/// Args for each story, as the catalog would supply them.
const STORIES: &[(&str, &str)] = &[
    ("Primary", r#"{"primary": true, "label": "Button"}"#),
    ("Secondary", r#"{"label": "Button"}"#),
    ("Large", r#"{"size": "large", "label": "Button"}"#),
    ("Small", r#"{"size": "small", "label": "Button"}"#),
    (
        "Custom background",
        r##"{"primary": true, "backgroundColor": "#1ea7fd", "label": "Click me", "data-testid": "btn1"}"##,
    ),
    ("Unknown size", r#"{"size": "huge", "label": "Falls back"}"#),
];

fn main() -> Result<(), ButtonError> {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    println!("Props:");
    for prop in BUTTON_PROP_TYPES {
        let required = if prop.required { " (required)" } else { "" };
        let default = prop.default.unwrap_or("-");
        println!(
            "  {}{required}: {}, default {default}. {}",
            prop.name,
            prop.kind.describe(),
            prop.description
        );
    }
    println!();

    let config = RenderConfig::default();
    for (name, args) in STORIES {
        let props = ButtonProperties::from_json(args, &config)?
            .on_click(|event| log::info!("clicked: {event:?}"))
            .on_key_down(|event| log::info!("key: {event:?}"));
        println!("{name}:\n  {}", to_html(&render_checked(&props, &config)));
    }

    match ButtonProperties::from_json(r#"{"primary": true}"#, &config) {
        Ok(_) => println!("unexpected: rendered without a label"),
        Err(err) => println!("Missing label:\n  {err}"),
    }

    Ok(())
}
