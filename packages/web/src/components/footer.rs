//! Site footer

use chrono::Datelike;
use dioxus::prelude::*;

pub const BRAND: &str = "JobBoard";

/// Footer rendered below every page
#[component]
pub fn Footer() -> Element {
    let year = chrono::Utc::now().year();

    rsx! {
        footer {
            class: "footer",
            p { "\u{00A9} {year} {BRAND}. All rights reserved." }
            p {
                class: "footer-tagline",
                "Connecting employers with the people they need."
            }
        }
    }
}
