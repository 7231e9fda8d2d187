//! Page Interactions Web - browser host
//!
//! Resolves the page against the live document at module start and wires
//! the binding table to real DOM listeners. Markup and styles live in
//! `static/`.

pub mod event_bridge;
pub mod web_dom;

use std::cell::RefCell;
use std::rc::Rc;

use page_interactions::{Page, PageConfig};
use wasm_bindgen::JsValue;

pub use event_bridge::{install_listeners, SharedPage};
pub use web_dom::WebDom;

/// Element ids and classes agreed with `static/index.html`.
pub const PAGE_CONFIG_YAML: &str = include_str!("../../../config/page.yaml");

/// Resolve the document and install every listener.
///
/// A missing element aborts setup before any listener is bound.
pub fn mount() -> Result<SharedPage, JsValue> {
    let config = PageConfig::from_yaml_str(PAGE_CONFIG_YAML)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let dom = WebDom::from_window()?;
    let page = Page::new(dom, config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let shared = Rc::new(RefCell::new(page));
    install_listeners(&shared)?;
    Ok(shared)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    match mount() {
        Ok(_) => tracing::info!("page interactions mounted"),
        Err(e) => {
            tracing::error!(error = ?e, "page interactions setup failed");
            web_sys::console::error_1(&e);
        }
    }
}
