//! Event Bridge - Connects DOM events to the page dispatcher
//!
//! One listener per row of the binding table. Each listener borrows the
//! shared page, dispatches its event to completion, and cancels the
//! browser's default action when the dispatcher asks for it.
//!
//! Architecture:
//! ```text
//! DOM event ──Closure──► EventBridge ──► Page::dispatch(PageEvent) ──► WebDom mutation
//!                                              │
//!                                              ▼
//!                                   DispatchOutcome.prevent_default
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use page_interactions::Page;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::web_dom::WebDom;

pub type SharedPage = Rc<RefCell<Page<WebDom>>>;

thread_local! {
    static LISTENERS_INSTALLED: RefCell<bool> = const { RefCell::new(false) };
}

/// Claim the one-time install. True only for the first caller.
fn mark_installed() -> bool {
    LISTENERS_INSTALLED.with(|installed| !installed.replace(true))
}

/// Run `attach` over `items` in order, stopping at the first failure.
/// On failure the error carries how many items were attached before it.
fn attach_all<T, E>(
    items: &[T],
    mut attach: impl FnMut(&T) -> Result<(), E>,
) -> Result<usize, (usize, E)> {
    for (bound, item) in items.iter().enumerate() {
        attach(item).map_err(|err| (bound, err))?;
    }
    Ok(items.len())
}

/// Install every listener in the page's binding table.
/// Called once during start; later calls are no-ops, even after a failed
/// install, since listeners bound before the failure stay attached.
pub fn install_listeners(page: &SharedPage) -> Result<usize, JsValue> {
    if !mark_installed() {
        tracing::warn!("EventBridge: listeners already installed");
        return Ok(0);
    }

    let bindings = page.borrow().bindings();
    let result = attach_all(&bindings, |binding| -> Result<(), JsValue> {
        let shared = Rc::clone(page);
        let page_event = binding.event;

        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            // Handlers never yield, so a held borrow means a nested event.
            let Ok(mut page) = shared.try_borrow_mut() else {
                tracing::warn!(%page_event, "EventBridge: dropped nested event");
                return;
            };
            let outcome = page.dispatch(page_event);
            if outcome.prevent_default {
                event.prevent_default();
            }
        });

        binding.element.add_event_listener_with_callback(
            binding.kind.dom_name(),
            callback.as_ref().unchecked_ref(),
        )?;

        // Listeners live as long as the page
        callback.forget();
        Ok(())
    });

    match result {
        Ok(count) => {
            tracing::info!(count, "EventBridge: listeners installed");
            Ok(count)
        }
        Err((bound, err)) => {
            tracing::error!(
                bound,
                total = bindings.len(),
                error = ?err,
                "EventBridge: listener install failed part way"
            );
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_is_claimed_once() {
        assert!(mark_installed());
        assert!(!mark_installed());
        assert!(!mark_installed());
    }

    #[test]
    fn test_attach_all_counts_every_item() {
        let mut seen = Vec::new();
        let result: Result<usize, (usize, &str)> = attach_all(&[1, 2, 3], |n| {
            seen.push(*n);
            Ok(())
        });
        assert_eq!(result, Ok(3));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_attach_all_reports_bound_before_failure() {
        let mut seen = Vec::new();
        let result = attach_all(&["a", "b", "bad", "c"], |item| {
            if *item == "bad" {
                return Err("rejected");
            }
            seen.push(*item);
            Ok(())
        });
        assert_eq!(result, Err((2, "rejected")));
        assert_eq!(seen, vec!["a", "b"]);
    }

    #[test]
    fn test_attach_all_empty_table() {
        let result: Result<usize, (usize, ())> = attach_all(&[] as &[u8], |_| Ok(()));
        assert_eq!(result, Ok(0));
    }
}
