//! Placeholder shown while the country dataset is being fetched.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 8px; padding: 48px 16px; color: #2b6a8f;",
            div {
                style: "width: 28px; height: 28px; border-radius: 50%; border: 3px solid #cfe3ee; border-top-color: #2b6a8f;",
            }
            span { style: "font-size: 14px;", "Loading country statistics..." }
        }
    }
}
