//! Page interactions - event-to-DOM bindings for the demo page
//!
//! Reveal messages, the light/dark toggle, collapsible FAQ panels and the
//! signup form validator. All behaviour is written against the [`Dom`]
//! trait so it runs the same in the browser (see the
//! `page-interactions-web` crate) and over [`MemoryDom`] in tests.
//!
//! ```text
//! browser event ──► EventBinding ──► Page::dispatch(PageEvent) ──► handler ──► Dom mutation
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod events;
pub mod faq;
pub mod form;
pub mod interactions;
pub mod memory_dom;
pub mod page;
pub mod registry;
pub mod theme;

pub use config::PageConfig;
pub use dom::Dom;
pub use error::{InteractionError, Result};
pub use events::{EventBinding, EventKind, PageEvent};
pub use form::{Field, FieldError, SubmitReport};
pub use memory_dom::{MemoryDom, NodeId};
pub use page::{DispatchOutcome, Page};
pub use registry::ElementRegistry;
pub use theme::ThemeMode;
