//! Reveal-on-click, reveal-on-hover and the live greeting.

use crate::config::ClassNames;
use crate::dom::Dom;
use crate::form::trim_input;
use crate::registry::InteractionElements;

/// Greeting text for an already trimmed, non-empty name.
pub fn greeting_for(name: &str) -> String {
    format!("Hello, {}! ", name)
}

/// Show the click message. There is no way back to hidden.
pub fn reveal_click_message<D: Dom>(
    dom: &mut D,
    elements: &InteractionElements<D::Handle>,
    classes: &ClassNames,
) {
    dom.remove_class(&elements.click_message, &classes.hidden);
}

pub fn hover_enter<D: Dom>(
    dom: &mut D,
    elements: &InteractionElements<D::Handle>,
    classes: &ClassNames,
) {
    dom.remove_class(&elements.hover_message, &classes.hidden);
}

pub fn hover_leave<D: Dom>(
    dom: &mut D,
    elements: &InteractionElements<D::Handle>,
    classes: &ClassNames,
) {
    dom.add_class(&elements.hover_message, &classes.hidden);
}

/// Re-render the greeting from the current name input.
pub fn update_greeting<D: Dom>(
    dom: &mut D,
    elements: &InteractionElements<D::Handle>,
    classes: &ClassNames,
) {
    let raw = dom.value(&elements.name_input);
    let name = trim_input(&raw);
    if name.is_empty() {
        dom.set_text(&elements.greeting, "");
        dom.add_class(&elements.greeting, &classes.hidden);
    } else {
        dom.set_text(&elements.greeting, &greeting_for(name));
        dom.remove_class(&elements.greeting, &classes.hidden);
    }
}
