//! Layout wrapping every routed page

use dioxus::prelude::*;

use crate::routes::Route;
use super::{Footer, Navbar};

/// Persistent frame: navbar, routed page area, footer
#[component]
pub fn Frame() -> Element {
    rsx! {
        div {
            class: "app",
            Navbar {}
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
