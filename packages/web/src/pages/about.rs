//! About page

use dioxus::prelude::*;

/// About the job board
#[component]
pub fn About() -> Element {
    rsx! {
        section {
            class: "page",
            h1 { class: "page-title", "About" }
            p {
                class: "page-lead",
                "We connect employers with job seekers through a simple, focused job board."
            }
            p {
                "Employers post openings and review applicants from their dashboard. "
                "Job seekers browse listings, save roles and track their applications."
            }
        }
    }
}
