use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use storybook_button::{ButtonProperties, RenderConfig, Size, render_button, render_checked};
use webdom::{AttrValue, Element, Event, FocusState, Key, tab_order, to_html};

fn background(props: &ButtonProperties) -> Option<String> {
    render_button(props)
        .style
        .background
        .map(|c| c.as_str().to_string())
}

// ============================================================================
// Class List
// ============================================================================

#[test]
fn test_class_list_has_three_tokens_in_order() {
    for size in [Size::Small, Size::Medium, Size::Large] {
        for primary in [false, true] {
            let el = render_button(&ButtonProperties::new("x").size(size).primary(primary));
            let tokens: Vec<_> = el.class_name().split(' ').map(String::from).collect();
            assert_eq!(tokens.len(), 3);
            assert_eq!(tokens[0], "storybook-button");
            assert_eq!(tokens[1], format!("storybook-button--{size}"));
            assert!(
                tokens[2] == "storybook-button--primary"
                    || tokens[2] == "storybook-button--secondary"
            );
        }
    }
}

#[test]
fn test_mode_follows_primary() {
    let primary = render_button(&ButtonProperties::new("x").primary(true));
    assert_eq!(primary.classes[2], "storybook-button--primary");

    let secondary = render_button(&ButtonProperties::new("x").primary(false));
    assert_eq!(secondary.classes[2], "storybook-button--secondary");

    let unset = render_button(&ButtonProperties::new("x"));
    assert_eq!(unset.classes[2], "storybook-button--secondary");
}

#[test]
fn test_default_size_is_medium() {
    let el = render_button(&ButtonProperties::new("x"));
    assert_eq!(el.classes[1], "storybook-button--medium");
}

// ============================================================================
// Inline Style
// ============================================================================

#[test]
fn test_background_color_applied_verbatim() {
    let props = ButtonProperties::new("x").background_color("#ff0000");
    assert_eq!(background(&props).as_deref(), Some("#ff0000"));
}

#[test]
fn test_no_style_without_background() {
    let el = render_button(&ButtonProperties::new("x"));
    assert!(el.style.is_empty());
    assert!(!to_html(&el).contains("style="));
}

#[test]
fn test_empty_background_means_no_style() {
    let props = ButtonProperties::new("x").background_color("");
    assert_eq!(background(&props), None);
    assert!(!to_html(&render_button(&props)).contains("style="));
}

// ============================================================================
// Label And Attributes
// ============================================================================

#[test]
fn test_label_is_visible_text() {
    let el = render_button(&ButtonProperties::new("Save"));
    assert_eq!(el.text_content(), "Save");
}

#[test]
fn test_button_is_keyboard_reachable() {
    let el = render_button(&ButtonProperties::new("x"));
    assert_eq!(el.tag, "button");
    assert_eq!(el.get_attr("type"), Some(&AttrValue::from("button")));
    assert_eq!(el.get_tab_index(), Some(0));
    assert_eq!(tab_order(&el).len(), 1);
}

#[test]
fn test_extra_attribute_forwarded() {
    let el = render_button(&ButtonProperties::new("x").attr("data-testid", "btn1"));
    assert_eq!(el.get_attr("data-testid"), Some(&AttrValue::from("btn1")));
}

#[test]
fn test_extra_attributes_override_defaults() {
    let el = render_button(
        &ButtonProperties::new("x")
            .attr("type", "submit")
            .attr("tabindex", "-1"),
    );
    assert_eq!(el.get_attr("type"), Some(&AttrValue::from("submit")));
    assert!(tab_order(&el).is_empty());
}

#[test]
fn test_reserved_attributes_not_forwarded() {
    let props = ButtonProperties::new("x")
        .attr("class", "hijack")
        .attr("style", "color: red");
    let el = render_checked(&props, &RenderConfig::default());

    assert_eq!(el.classes.len(), 3);
    assert!(el.get_attr("class").is_none());
    assert!(el.get_attr("style").is_none());
}

// ============================================================================
// Handlers
// ============================================================================

#[test]
fn test_click_and_keydown_handlers_forwarded() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let keys = Arc::new(AtomicUsize::new(0));
    let (c, k) = (clicks.clone(), keys.clone());

    let el = render_button(
        &ButtonProperties::new("x")
            .on_click(move |_| {
                c.fetch_add(1, Ordering::SeqCst);
            })
            .on_key_down(move |_| {
                k.fetch_add(1, Ordering::SeqCst);
            }),
    );

    assert!(el.dispatch(&Event::click()));
    assert!(el.dispatch(&Event::key(Key::Char('a'))));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert_eq!(keys.load(Ordering::SeqCst), 1);
}

#[test]
fn test_extra_handler_forwarded() {
    let focused = Arc::new(AtomicUsize::new(0));
    let f = focused.clone();
    let el = render_button(&ButtonProperties::new("x").on("focus", move |_| {
        f.fetch_add(1, Ordering::SeqCst);
    }));

    assert!(el.dispatch(&Event::Focus {
        target: Some("x".to_string())
    }));
    assert_eq!(focused.load(Ordering::SeqCst), 1);
}

#[test]
fn test_keyboard_activation_reaches_click_handler() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let c = clicks.clone();
    let el = render_button(&ButtonProperties::new("x").on_click(move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    }));
    let mut focus = FocusState::new();

    focus.handle_key(&el, Key::Tab);
    assert!(focus.handle_key(&el, Key::Enter));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
}

#[test]
fn test_tab_reaches_button_among_other_controls() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let c = clicks.clone();
    let save = ButtonProperties::new("Save").attr("id", "save").on_click(move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    });
    let root = Element::div()
        .child(Element::button().id("before").text("Before"))
        .child(Element::span().id("first").tab_index(2))
        .child(render_button(&save))
        .child(Element::new("input").id("after"));

    let ids: Vec<_> = tab_order(&root).into_iter().filter_map(|e| e.get_id()).collect();
    assert_eq!(ids, vec!["first", "before", "save", "after"]);

    let mut focus = FocusState::new();
    for _ in 0..3 {
        focus.handle_key(&root, Key::Tab);
    }
    let focused = focus.focused_element(&root).unwrap();
    assert_eq!(focused.get_id(), Some("save"));
    assert!(focused.class_name().starts_with("storybook-button "));

    assert!(focus.handle_key(&root, Key::Enter));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
}

#[test]
fn test_no_handlers_when_unset() {
    let el = render_button(&ButtonProperties::new("x"));
    assert!(el.handlers.is_empty());
    assert!(!el.dispatch(&Event::click()));
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_large_primary_with_background() {
    let props = ButtonProperties::new("Click me")
        .primary(true)
        .size(Size::Large)
        .background_color("#1ea7fd");

    assert_eq!(
        to_html(&render_button(&props)),
        "<button class=\"storybook-button storybook-button--large storybook-button--primary\" \
         style=\"background-color: #1ea7fd\" type=\"button\" tabindex=\"0\">Click me</button>"
    );
}

#[test]
fn test_label_only() {
    assert_eq!(
        to_html(&render_button(&ButtonProperties::new("Cancel"))),
        "<button class=\"storybook-button storybook-button--medium storybook-button--secondary\" \
         type=\"button\" tabindex=\"0\">Cancel</button>"
    );
}

#[test]
fn test_render_does_not_consume_props() {
    let props = ButtonProperties::new("Again").primary(true);
    let first = to_html(&props.render());
    let second = to_html(&props.render());
    assert_eq!(first, second);
}
