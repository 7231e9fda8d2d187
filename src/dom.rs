//! DOM seam
//!
//! Everything the handlers touch goes through [`Dom`]. The browser build
//! implements it over `web-sys`; tests use [`crate::memory_dom::MemoryDom`].
//! Handles are cheap clones that identify one element.

pub trait Dom {
    /// Element handle. `web_sys::Element` in the browser, an index in memory.
    type Handle: Clone + std::fmt::Debug;

    fn element_by_id(&self, id: &str) -> Option<Self::Handle>;

    /// All elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Handle>;

    /// First descendant of `root` carrying `class`.
    fn descendant_by_class(&self, root: &Self::Handle, class: &str) -> Option<Self::Handle>;

    fn parent(&self, element: &Self::Handle) -> Option<Self::Handle>;

    fn next_element_sibling(&self, element: &Self::Handle) -> Option<Self::Handle>;

    fn body(&self) -> Option<Self::Handle>;

    fn has_class(&self, element: &Self::Handle, class: &str) -> bool;

    fn add_class(&mut self, element: &Self::Handle, class: &str);

    fn remove_class(&mut self, element: &Self::Handle, class: &str);

    fn text(&self, element: &Self::Handle) -> String;

    fn set_text(&mut self, element: &Self::Handle, text: &str);

    /// Current value of a form control; empty for anything else.
    fn value(&self, element: &Self::Handle) -> String;

    fn set_value(&mut self, element: &Self::Handle, value: &str);

    /// Restore every control inside `form` to its empty default.
    fn reset_form(&mut self, form: &Self::Handle);

    /// Flip `class` on `element`, returning whether it is now present.
    fn toggle_class(&mut self, element: &Self::Handle, class: &str) -> bool {
        if self.has_class(element, class) {
            self.remove_class(element, class);
            false
        } else {
            self.add_class(element, class);
            true
        }
    }
}
