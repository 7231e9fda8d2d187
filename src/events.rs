//! Page events and the binding table
//!
//! Each [`EventBinding`] says: when `kind` fires on `element`, dispatch
//! `event`. The table is derived from the registry once; the host installs
//! one listener per row.

use std::fmt;

use crate::form::Field;
use crate::registry::ElementRegistry;

/// DOM event a binding listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    PointerEnter,
    PointerLeave,
    Input,
    Submit,
}

impl EventKind {
    /// Name passed to `addEventListener`.
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::PointerEnter => "mouseover",
            EventKind::PointerLeave => "mouseout",
            EventKind::Input => "input",
            EventKind::Submit => "submit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    RevealClicked,
    HoverEntered,
    HoverLeft,
    GreetingTyped,
    ThemeToggled,
    /// Index into the registry's FAQ panels.
    FaqQuestionClicked(usize),
    FieldEdited(Field),
    SignupSubmitted,
}

impl fmt::Display for PageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageEvent::RevealClicked => write!(f, "reveal-clicked"),
            PageEvent::HoverEntered => write!(f, "hover-entered"),
            PageEvent::HoverLeft => write!(f, "hover-left"),
            PageEvent::GreetingTyped => write!(f, "greeting-typed"),
            PageEvent::ThemeToggled => write!(f, "theme-toggled"),
            PageEvent::FaqQuestionClicked(i) => write!(f, "faq-question-clicked[{}]", i),
            PageEvent::FieldEdited(field) => write!(f, "field-edited[{}]", field),
            PageEvent::SignupSubmitted => write!(f, "signup-submitted"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventBinding<H> {
    pub element: H,
    pub kind: EventKind,
    pub event: PageEvent,
}

impl<H: Clone> EventBinding<H> {
    fn new(element: &H, kind: EventKind, event: PageEvent) -> Self {
        Self {
            element: element.clone(),
            kind,
            event,
        }
    }
}

/// Every listener the page needs.
pub fn bindings<H: Clone>(registry: &ElementRegistry<H>) -> Vec<EventBinding<H>> {
    let i = &registry.interactions;
    let mut out = vec![
        EventBinding::new(&i.click_button, EventKind::Click, PageEvent::RevealClicked),
        EventBinding::new(&i.hover_box, EventKind::PointerEnter, PageEvent::HoverEntered),
        EventBinding::new(&i.hover_box, EventKind::PointerLeave, PageEvent::HoverLeft),
        EventBinding::new(&i.name_input, EventKind::Input, PageEvent::GreetingTyped),
        EventBinding::new(
            &registry.theme.toggle,
            EventKind::Click,
            PageEvent::ThemeToggled,
        ),
    ];

    out.extend(registry.faq.iter().enumerate().map(|(index, panel)| {
        EventBinding::new(
            &panel.question,
            EventKind::Click,
            PageEvent::FaqQuestionClicked(index),
        )
    }));

    out.push(EventBinding::new(
        &registry.signup.form,
        EventKind::Submit,
        PageEvent::SignupSubmitted,
    ));
    out.extend(Field::ALL.iter().map(|&field| {
        EventBinding::new(
            &registry.signup.field(field).input,
            EventKind::Input,
            PageEvent::FieldEdited(field),
        )
    }));

    out
}
