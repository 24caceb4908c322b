//! Server-side rendering tests for the shell's views
//!
//! These render components that stand on their own or only need the theme and
//! auth scopes. Views mounted by the router are rendered in `router_tests.rs`.

#![allow(non_snake_case)]

mod common;

use chrono::Datelike;
use common::{member, SignedIn};
use dioxus::prelude::*;
use jobboard_web::components::{Footer, BRAND};
use jobboard_web::pages::{About, Blog, EmployerDashboard, JobListings};
use jobboard_web::theme::{use_theme, Theme, ThemeProvider};
use jobboard_web::types::UserRole;

// ============================================================================
// Test Helpers
// ============================================================================

#[component]
fn PrimarySwatch() -> Element {
    let theme = use_theme();
    rsx! {
        span { class: "swatch", "{theme.palette.primary}" }
    }
}

// ============================================================================
// Theme scope
// ============================================================================

#[test]
fn test_theme_provider_emits_tokens_and_baseline() {
    let html = dioxus_ssr::render_element(rsx! {
        ThemeProvider {
            theme: Theme::job_board(),
            p { "content" }
        }
    });

    assert!(html.contains("--color-primary: #2563eb;"), "{html}");
    assert!(html.contains("--color-secondary: #64748b;"), "{html}");
    assert!(html.contains("box-sizing: border-box"), "{html}");
    assert!(html.contains("content"), "{html}");
}

#[test]
fn test_baseline_is_applied_once() {
    let html = dioxus_ssr::render_element(rsx! {
        ThemeProvider {
            theme: Theme::job_board(),
            About {}
            Blog {}
        }
    });

    assert_eq!(html.matches("box-sizing: border-box").count(), 1, "{html}");
}

#[test]
fn test_descendants_resolve_theme_without_props() {
    let html = dioxus_ssr::render_element(rsx! {
        ThemeProvider {
            theme: Theme::job_board(),
            div {
                PrimarySwatch {}
            }
        }
    });

    assert!(html.contains("class=\"swatch\">#2563eb"), "{html}");
}

// ============================================================================
// Chrome and pages
// ============================================================================

#[test]
fn test_footer() {
    let html = dioxus_ssr::render_element(rsx! { Footer {} });
    let year = chrono::Utc::now().year();

    assert!(html.contains("<footer"), "{html}");
    assert!(html.contains(BRAND), "{html}");
    assert!(html.contains(&year.to_string()), "{html}");
}

#[test]
fn test_static_pages_render() {
    let about = dioxus_ssr::render_element(rsx! { About {} });
    assert!(about.contains("About"), "{about}");

    let blog = dioxus_ssr::render_element(rsx! { Blog {} });
    assert!(blog.contains("Writing a job post that gets read"), "{blog}");
    assert_eq!(blog.matches("<article").count(), 3, "{blog}");

    let jobs = dioxus_ssr::render_element(rsx! { JobListings {} });
    assert!(jobs.contains("Jobs"), "{jobs}");
}

// ============================================================================
// Auth scope
// ============================================================================

#[test]
fn test_employer_dashboard_for_employer() {
    let html = dioxus_ssr::render_element(rsx! {
        SignedIn {
            user: member(UserRole::Employer),
            loading: false,
            EmployerDashboard {}
        }
    });

    assert!(html.contains("Employer Dashboard"), "{html}");
    assert!(html.contains("Active listings"), "{html}");
}

#[test]
fn test_dashboard_waits_for_session() {
    let html = dioxus_ssr::render_element(rsx! {
        SignedIn {
            loading: true,
            EmployerDashboard {}
        }
    });

    assert!(html.contains("Loading..."), "{html}");
    assert!(!html.contains("Active listings"), "{html}");
}
