//! Root application component
//!
//! Scopes nest in a fixed order, outermost first: theme, authentication,
//! routing. The persistent frame lives in the router layout.

use dioxus::prelude::*;

use crate::auth::AuthProvider;
use crate::routes::Route;
use crate::theme::{Theme, ThemeProvider};

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Component styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        ThemeProvider {
            theme: Theme::job_board(),

            // Auth context sits outside the router so navigation keeps the session
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}
