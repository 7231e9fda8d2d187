//! Collapsible FAQ panels. Each answer opens and closes on its own.

use crate::config::ClassNames;
use crate::dom::Dom;
use crate::registry::FaqPanel;

/// Flip the answer under `panel`. Returns true when it is now open.
pub fn toggle_panel<D: Dom>(
    dom: &mut D,
    panel: &FaqPanel<D::Handle>,
    classes: &ClassNames,
) -> bool {
    dom.toggle_class(&panel.answer, &classes.hidden);
    is_open(dom, panel, classes)
}

pub fn is_open<D: Dom>(dom: &D, panel: &FaqPanel<D::Handle>, classes: &ClassNames) -> bool {
    !dom.has_class(&panel.answer, &classes.hidden)
}
