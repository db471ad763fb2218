//! Page-replacing error notice.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorNoticeProps {
    pub message: String,
}

/// Shown instead of the whole dashboard when initialization fails.
#[component]
pub fn ErrorNotice(props: ErrorNoticeProps) -> Element {
    rsx! {
        div {
            style: "max-width: 720px; margin: 48px auto 0 auto;",
            div {
                role: "alert",
                style: "padding: 12px 16px; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                "{props.message}"
            }
        }
    }
}
