//! Home page component

use dioxus::prelude::*;

use crate::routes::Route;

/// Home page - hero and entry points into the board
#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "hero",
            h1 { class: "hero-title", "Find your next job" }
            p {
                class: "hero-subtitle",
                "Browse open roles from employers hiring now, or post a listing and reach job seekers."
            }
            div {
                class: "hero-actions",
                Link { to: Route::JobListings {}, class: "button button-primary", "Browse jobs" }
                Link { to: Route::Register {}, class: "button button-secondary", "Create an account" }
            }
        }
    }
}
