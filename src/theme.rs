//! Light/dark mode toggle
//!
//! The body marker class is the only record of the mode. Pages start light;
//! nothing is persisted across reloads.

use std::fmt;

use crate::config::ClassNames;
use crate::dom::Dom;
use crate::registry::ThemeElements;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Label for the toggle while in this mode; it names the other mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Switch to Dark Mode",
            ThemeMode::Dark => "Switch to Light Mode",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => f.write_str("light"),
            ThemeMode::Dark => f.write_str("dark"),
        }
    }
}

/// Current mode as recorded on the body.
pub fn current_mode<D: Dom>(
    dom: &D,
    elements: &ThemeElements<D::Handle>,
    classes: &ClassNames,
) -> ThemeMode {
    if dom.has_class(&elements.body, &classes.dark_mode) {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

/// Flip the body marker and relabel the toggle. Returns the new mode.
pub fn toggle_theme<D: Dom>(
    dom: &mut D,
    elements: &ThemeElements<D::Handle>,
    classes: &ClassNames,
) -> ThemeMode {
    dom.toggle_class(&elements.body, &classes.dark_mode);
    let mode = current_mode(dom, elements, classes);
    dom.set_text(&elements.toggle, mode.toggle_label());
    tracing::debug!(%mode, "theme toggled");
    mode
}
