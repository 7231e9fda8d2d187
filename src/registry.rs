//! Element registry
//!
//! Resolves every element the handlers need exactly once, at startup. A
//! missing element fails the whole setup; after that the registry is
//! read-only and handlers never look anything up again.

use crate::config::PageConfig;
use crate::dom::Dom;
use crate::error::{InteractionError, Result};
use crate::form::Field;

#[derive(Debug, Clone)]
pub struct InteractionElements<H> {
    pub click_button: H,
    pub click_message: H,
    pub hover_box: H,
    pub hover_message: H,
    pub name_input: H,
    pub greeting: H,
}

#[derive(Debug, Clone)]
pub struct ThemeElements<H> {
    pub body: H,
    pub toggle: H,
}

/// A question and the answer element right after it.
#[derive(Debug, Clone)]
pub struct FaqPanel<H> {
    pub question: H,
    pub answer: H,
}

/// An input and the error slot that sits in the same form group.
#[derive(Debug, Clone)]
pub struct FieldHandles<H> {
    pub input: H,
    pub error: H,
}

#[derive(Debug, Clone)]
pub struct SignupFormElements<H> {
    pub form: H,
    pub name: FieldHandles<H>,
    pub email: FieldHandles<H>,
    pub password: FieldHandles<H>,
    pub confirm_password: FieldHandles<H>,
    pub success: H,
}

impl<H> SignupFormElements<H> {
    pub fn field(&self, field: Field) -> &FieldHandles<H> {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ElementRegistry<H> {
    pub interactions: InteractionElements<H>,
    pub theme: ThemeElements<H>,
    pub faq: Vec<FaqPanel<H>>,
    pub signup: SignupFormElements<H>,
}

impl<H: Clone + std::fmt::Debug> ElementRegistry<H> {
    pub fn resolve<D: Dom<Handle = H>>(dom: &D, config: &PageConfig) -> Result<Self> {
        let ids = &config.ids;

        let interactions = InteractionElements {
            click_button: require(dom, &ids.click_button)?,
            click_message: require(dom, &ids.click_message)?,
            hover_box: require(dom, &ids.hover_box)?,
            hover_message: require(dom, &ids.hover_message)?,
            name_input: require(dom, &ids.name_input)?,
            greeting: require(dom, &ids.greeting)?,
        };

        let theme = ThemeElements {
            body: dom.body().ok_or(InteractionError::NoBody)?,
            toggle: require(dom, &ids.mode_toggle)?,
        };

        let faq = dom
            .elements_by_class(&config.classes.faq_question)
            .into_iter()
            .enumerate()
            .map(|(index, question)| {
                dom.next_element_sibling(&question)
                    .map(|answer| FaqPanel { question, answer })
                    .ok_or(InteractionError::MissingAnswer { index })
            })
            .collect::<Result<Vec<_>>>()?;

        let signup = SignupFormElements {
            form: require(dom, &ids.signup_form)?,
            name: field_handles(dom, config, Field::Name, &ids.full_name)?,
            email: field_handles(dom, config, Field::Email, &ids.email)?,
            password: field_handles(dom, config, Field::Password, &ids.password)?,
            confirm_password: field_handles(
                dom,
                config,
                Field::ConfirmPassword,
                &ids.confirm_password,
            )?,
            success: require(dom, &ids.form_success)?,
        };

        tracing::info!(
            faq_panels = faq.len(),
            "ElementRegistry: resolved page elements"
        );

        Ok(Self {
            interactions,
            theme,
            faq,
            signup,
        })
    }
}

fn require<D: Dom>(dom: &D, id: &str) -> Result<D::Handle> {
    dom.element_by_id(id)
        .ok_or_else(|| InteractionError::ElementNotFound { id: id.to_string() })
}

/// The error slot is the first `error_message` element inside the input's parent.
fn field_handles<D: Dom>(
    dom: &D,
    config: &PageConfig,
    field: Field,
    id: &str,
) -> Result<FieldHandles<D::Handle>> {
    let input = require(dom, id)?;
    let slot_missing = || InteractionError::ErrorSlotNotFound {
        field: field.label().to_string(),
        class: config.classes.error_message.clone(),
    };
    let group = dom.parent(&input).ok_or_else(slot_missing)?;
    let error = dom
        .descendant_by_class(&group, &config.classes.error_message)
        .ok_or_else(slot_missing)?;
    Ok(FieldHandles { input, error })
}
