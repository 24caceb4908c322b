//! Job listing and job detail pages

use dioxus::prelude::*;

use crate::routes::Route;
use crate::types::JobId;

/// Job listing index
#[component]
pub fn JobListings() -> Element {
    rsx! {
        section {
            class: "page",
            h1 { class: "page-title", "Jobs" }
            p { class: "page-lead", "Open positions from employers on the board." }
            div {
                class: "empty-state",
                p { "No jobs have been posted yet. Check back soon." }
            }
        }
    }
}

/// Job detail, parameterized by the job identifier from the path
#[component]
pub fn JobDetails(id: JobId) -> Element {
    rsx! {
        section {
            class: "page",
            Link { to: Route::JobListings {}, class: "back-link", "\u{2190} All jobs" }
            h1 { class: "page-title", "Job #{id}" }
            p {
                class: "page-lead",
                "Details for this position will appear here."
            }
        }
    }
}
