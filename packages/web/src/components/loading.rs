//! Loading components

use dioxus::prelude::*;

/// Full-page loading spinner
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "loading",
            div {
                class: "loading-dots",
                div { class: "loading-dot" }
                div { class: "loading-dot", style: "animation-delay: 0.1s" }
                div { class: "loading-dot", style: "animation-delay: 0.2s" }
            }
            p { class: "loading-label", "Loading..." }
        }
    }
}
