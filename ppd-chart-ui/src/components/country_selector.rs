//! Multi-select control for choosing countries.

use crate::dom;
use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CountrySelectorProps {
    /// DOM id of the select element
    pub id: String,
    /// Called with the chosen option values on every change
    pub on_change: EventHandler<Vec<String>>,
}

/// Country multi-select.
///
/// One option per record in dataset order, value and text both the country
/// name. Duplicated names get duplicated options.
#[component]
pub fn CountrySelector(props: CountrySelectorProps) -> Element {
    let state = use_context::<AppState>();
    let countries = state.country_names();
    let selected = state.selected.read().clone();

    let select_id = props.id.clone();
    let on_change = props.on_change;
    let handle_change = move |_evt: Event<FormData>| {
        on_change.call(dom::selected_values(&select_id));
    };

    rsx! {
        div {
            style: "margin: 8px 0 16px 0;",
            label {
                r#for: "{props.id}",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "Select countries: "
            }
            select {
                id: "{props.id}",
                multiple: true,
                size: "8",
                style: "width: 100%;",
                onchange: handle_change,
                for country in countries.iter() {
                    option {
                        value: "{country}",
                        selected: selected.contains(country),
                        "{country}"
                    }
                }
            }
        }
    }
}
