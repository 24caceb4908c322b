//! Site navigation bar

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::{dashboard_route, nav_items, Route};
use super::BRAND;

/// Navigation bar rendered above every page
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let account = auth
        .user
        .read()
        .as_ref()
        .map(|user| (dashboard_route(user.role), user.display_name().to_string()));
    let loading = *auth.loading.read();

    let handle_logout = move |_| {
        spawn(async move {
            auth.sign_out().await;
            navigator.push(Route::Home {});
        });
    };

    rsx! {
        nav {
            class: "navbar",

            // Logo / Brand
            Link {
                to: Route::Home {},
                class: "navbar-brand",
                "{BRAND}"
            }

            // Nav links
            div {
                class: "navbar-links",
                for item in nav_items() {
                    NavLink { key: "{item.label}", to: item.to, label: item.label }
                }
            }

            // User menu
            div {
                class: "navbar-account",
                if let Some((dashboard, name)) = account {
                    Link {
                        to: dashboard,
                        class: "navbar-user",
                        "{name}"
                    }
                    button {
                        class: "button button-secondary",
                        onclick: handle_logout,
                        "Logout"
                    }
                } else if !loading {
                    Link { to: Route::Login {}, class: "navbar-link", "Login" }
                    Link { to: Route::Register {}, class: "button button-primary", "Register" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active { "navbar-link navbar-link-active" } else { "navbar-link" },
            "{props.label}"
        }
    }
}
