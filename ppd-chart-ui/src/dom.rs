//! Direct DOM reads that RSX event data does not cover.

use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

/// Values of the currently selected options of a multi-select, in option
/// order. Returns an empty list if the element is missing.
pub fn selected_values(select_id: &str) -> Vec<String> {
    let Some(select) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(select_id))
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    else {
        log::warn!("[PPD] dom: select #{} not found", select_id);
        return Vec::new();
    };

    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|opt| opt.value())
        .collect()
}
