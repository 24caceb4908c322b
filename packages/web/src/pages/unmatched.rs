//! Routed region for paths that match no declared page

use dioxus::prelude::*;

/// Renders nothing; the surrounding frame stays in place
#[component]
pub fn Unmatched(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    // Once per mount, not on every re-render.
    use_hook(move || tracing::warn!(path = %path, "No route matched"));

    rsx! {}
}
