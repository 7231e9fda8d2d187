//! Page dispatcher
//!
//! Owns the DOM, the resolved registry and the config. Every handler runs to
//! completion inside [`Page::dispatch`]; the host only forwards events and
//! honours [`DispatchOutcome::prevent_default`].

use crate::config::PageConfig;
use crate::dom::Dom;
use crate::error::Result;
use crate::events::{self, EventBinding, PageEvent};
use crate::faq;
use crate::form::{FormValidator, SubmitReport};
use crate::interactions;
use crate::registry::ElementRegistry;
use crate::theme;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// The host must cancel the browser's default action.
    pub prevent_default: bool,
    /// Set for submissions.
    pub submit: Option<SubmitReport>,
}

pub struct Page<D: Dom> {
    dom: D,
    registry: ElementRegistry<D::Handle>,
    config: PageConfig,
}

impl<D: Dom> Page<D> {
    /// Resolve every element up front. Fails if any is missing.
    pub fn new(dom: D, config: PageConfig) -> Result<Self> {
        config.validate()?;
        let registry = ElementRegistry::resolve(&dom, &config)?;
        Ok(Self {
            dom,
            registry,
            config,
        })
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn registry(&self) -> &ElementRegistry<D::Handle> {
        &self.registry
    }

    pub fn bindings(&self) -> Vec<EventBinding<D::Handle>> {
        events::bindings(&self.registry)
    }

    pub fn dispatch(&mut self, event: PageEvent) -> DispatchOutcome {
        tracing::debug!(%event, "dispatch");
        let classes = &self.config.classes;
        let reg = &self.registry;
        let dom = &mut self.dom;

        match event {
            PageEvent::RevealClicked => {
                interactions::reveal_click_message(dom, &reg.interactions, classes)
            }
            PageEvent::HoverEntered => interactions::hover_enter(dom, &reg.interactions, classes),
            PageEvent::HoverLeft => interactions::hover_leave(dom, &reg.interactions, classes),
            PageEvent::GreetingTyped => {
                interactions::update_greeting(dom, &reg.interactions, classes)
            }
            PageEvent::ThemeToggled => {
                theme::toggle_theme(dom, &reg.theme, classes);
            }
            PageEvent::FaqQuestionClicked(index) => match reg.faq.get(index) {
                Some(panel) => {
                    faq::toggle_panel(dom, panel, classes);
                }
                None => tracing::warn!(index, "no FAQ panel at index"),
            },
            PageEvent::FieldEdited(field) => {
                let validator =
                    FormValidator::new(&reg.signup, classes, &self.config.success_message);
                // Live feedback is shown inline; the result is not needed here.
                let _ = validator.validate(dom, field);
            }
            PageEvent::SignupSubmitted => {
                let validator =
                    FormValidator::new(&reg.signup, classes, &self.config.success_message);
                let report = validator.submit(dom);
                return DispatchOutcome {
                    prevent_default: true,
                    submit: Some(report),
                };
            }
        }

        DispatchOutcome::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InteractionError;
    use crate::memory_dom::MemoryDom;

    #[test]
    fn test_new_rejects_missing_markup() {
        let result = Page::new(MemoryDom::new(), PageConfig::default());
        assert!(matches!(
            result,
            Err(InteractionError::ElementNotFound { .. })
        ));
    }

    #[test]
    fn test_only_submit_prevents_default() {
        let config = PageConfig::default();
        let mut page = Page::new(MemoryDom::demo_page(&config, 1), config).unwrap();

        for event in [
            PageEvent::RevealClicked,
            PageEvent::HoverEntered,
            PageEvent::HoverLeft,
            PageEvent::GreetingTyped,
            PageEvent::ThemeToggled,
            PageEvent::FaqQuestionClicked(0),
        ] {
            assert_eq!(page.dispatch(event), DispatchOutcome::default());
        }

        let outcome = page.dispatch(PageEvent::SignupSubmitted);
        assert!(outcome.prevent_default);
        assert!(outcome.submit.is_some());
    }

    #[test]
    fn test_unknown_faq_index_is_ignored() {
        let config = PageConfig::default();
        let mut page = Page::new(MemoryDom::demo_page(&config, 1), config).unwrap();
        let answer = page.registry().faq[0].answer;

        page.dispatch(PageEvent::FaqQuestionClicked(7));
        assert!(page.dom().has_class(&answer, "hidden"));
    }
}
