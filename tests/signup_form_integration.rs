//! Signup form scenarios driven through the page dispatcher
//!
//! Each test stands up the stock page over `MemoryDom`, types into the
//! inputs, and dispatches the same events the browser would.
//!
//! Run with: cargo test --test signup_form_integration

use page_interactions::{
    Dom, Field, FieldError, MemoryDom, NodeId, Page, PageConfig, PageEvent,
};

struct FormHarness {
    page: Page<MemoryDom>,
}

impl FormHarness {
    fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("page_interactions=debug")
            .with_test_writer()
            .try_init();

        let config = PageConfig::default();
        let dom = MemoryDom::demo_page(&config, 2);
        let page = Page::new(dom, config).expect("demo page resolves");
        Self { page }
    }

    fn input(&self, field: Field) -> NodeId {
        self.page.registry().signup.field(field).input
    }

    fn slot(&self, field: Field) -> NodeId {
        self.page.registry().signup.field(field).error
    }

    /// Set the value without firing the input event.
    fn fill(&mut self, field: Field, value: &str) {
        let input = self.input(field);
        self.page.dom_mut().set_value(&input, value);
    }

    /// Set the value and fire the field's input event.
    fn type_into(&mut self, field: Field, value: &str) {
        self.fill(field, value);
        self.page.dispatch(PageEvent::FieldEdited(field));
    }

    fn value(&self, field: Field) -> String {
        self.page.dom().value(&self.input(field))
    }

    fn error_text(&self, field: Field) -> String {
        self.page.dom().text(&self.slot(field))
    }

    /// Slot visible and input flagged; both must always agree.
    fn shows_error(&self, field: Field) -> bool {
        let dom = self.page.dom();
        let visible = !dom.has_class(&self.slot(field), "hidden");
        let flagged = dom.has_class(&self.input(field), "error");
        assert_eq!(visible, flagged, "error slot and input flag diverged for {field}");
        visible
    }

    fn success_text(&self) -> String {
        let success = self.page.registry().signup.success;
        self.page.dom().text(&success)
    }
}

#[test]
fn test_valid_submission_succeeds_and_resets() {
    let mut h = FormHarness::new();
    h.fill(Field::Name, "Jane Doe");
    h.fill(Field::Email, "jane@x.com");
    h.fill(Field::Password, "secret1");
    h.fill(Field::ConfirmPassword, "secret1");

    let outcome = h.page.dispatch(PageEvent::SignupSubmitted);

    assert!(outcome.prevent_default);
    assert!(outcome.submit.as_ref().is_some_and(|r| r.is_valid()));
    assert_eq!(h.success_text(), "Registration successful! 🎉");
    for field in Field::ALL {
        assert_eq!(h.value(field), "", "{field} not reset");
        assert!(!h.shows_error(field));
        assert_eq!(h.error_text(field), "");
    }
}

#[test]
fn test_missing_name_blocks_submission() {
    let mut h = FormHarness::new();
    h.fill(Field::Name, "");
    h.fill(Field::Email, "jane@x.com");
    h.fill(Field::Password, "secret1");
    h.fill(Field::ConfirmPassword, "secret1");

    let outcome = h.page.dispatch(PageEvent::SignupSubmitted);

    assert!(outcome.prevent_default);
    let report = outcome.submit.expect("submit report");
    assert!(!report.is_valid());
    assert_eq!(
        report.errors().collect::<Vec<_>>(),
        vec![(Field::Name, FieldError::NameRequired)]
    );

    assert_eq!(h.success_text(), "");
    assert!(h.shows_error(Field::Name));
    assert_eq!(h.error_text(Field::Name), "Name is required.");
    for field in [Field::Email, Field::Password, Field::ConfirmPassword] {
        assert!(!h.shows_error(field));
    }
    assert_eq!(h.value(Field::Email), "jane@x.com");
    assert_eq!(h.value(Field::Password), "secret1");
    assert_eq!(h.value(Field::ConfirmPassword), "secret1");
}

#[test]
fn test_all_validators_run_on_submit() {
    let mut h = FormHarness::new();
    h.fill(Field::Name, "John3");
    h.fill(Field::Email, "a@b");
    h.fill(Field::Password, "abc12");
    h.fill(Field::ConfirmPassword, "abc13");

    h.page.dispatch(PageEvent::SignupSubmitted);

    assert_eq!(
        h.error_text(Field::Name),
        "Name can only contain letters and spaces."
    );
    assert_eq!(
        h.error_text(Field::Email),
        "Please enter a valid email address."
    );
    assert_eq!(
        h.error_text(Field::Password),
        "Password must be at least 6 characters."
    );
    assert_eq!(h.error_text(Field::ConfirmPassword), "Passwords do not match.");
    for field in Field::ALL {
        assert!(h.shows_error(field));
    }
}

#[test]
fn test_resubmit_clears_previous_success() {
    let mut h = FormHarness::new();
    h.fill(Field::Name, "Jane Doe");
    h.fill(Field::Email, "jane@x.com");
    h.fill(Field::Password, "secret1");
    h.fill(Field::ConfirmPassword, "secret1");
    h.page.dispatch(PageEvent::SignupSubmitted);
    assert!(!h.success_text().is_empty());

    // fields are empty after the reset, so the next submit fails everywhere
    let outcome = h.page.dispatch(PageEvent::SignupSubmitted);
    assert_eq!(outcome.submit.map(|r| r.errors().count()), Some(4));
    assert_eq!(h.success_text(), "");
    assert_eq!(h.error_text(Field::ConfirmPassword), "Please confirm your password.");
}

#[test]
fn test_live_validation_tracks_typing() {
    let mut h = FormHarness::new();

    h.type_into(Field::Password, "abc12");
    assert!(h.shows_error(Field::Password));
    assert_eq!(
        h.error_text(Field::Password),
        "Password must be at least 6 characters."
    );

    h.type_into(Field::Password, "abc123");
    assert!(!h.shows_error(Field::Password));
    assert_eq!(h.error_text(Field::Password), "");

    // other fields are untouched by live validation
    assert!(!h.shows_error(Field::Name));
    assert!(!h.shows_error(Field::ConfirmPassword));
}

#[test]
fn test_live_confirm_rereads_password() {
    let mut h = FormHarness::new();
    h.fill(Field::Password, "secret1");
    h.type_into(Field::ConfirmPassword, "secret1");
    assert!(!h.shows_error(Field::ConfirmPassword));

    // changing the password does not revalidate confirm on its own
    h.type_into(Field::Password, "secret2");
    assert!(!h.shows_error(Field::ConfirmPassword));

    h.type_into(Field::ConfirmPassword, "secret1");
    assert!(h.shows_error(Field::ConfirmPassword));
    assert_eq!(h.error_text(Field::ConfirmPassword), "Passwords do not match.");
}

#[test]
fn test_fix_after_failed_submit_clears_only_that_field() {
    let mut h = FormHarness::new();
    h.page.dispatch(PageEvent::SignupSubmitted);
    for field in Field::ALL {
        assert!(h.shows_error(field));
    }

    h.type_into(Field::Email, "user@example.com");
    assert!(!h.shows_error(Field::Email));
    assert!(h.shows_error(Field::Name));
    assert!(h.shows_error(Field::Password));
    assert!(h.shows_error(Field::ConfirmPassword));
}
