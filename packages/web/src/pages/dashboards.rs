//! Employer and job-seeker dashboards

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::types::UserRole;

/// Employer dashboard
#[component]
pub fn EmployerDashboard() -> Element {
    rsx! {
        RoleGate {
            role: UserRole::Employer,
            section {
                class: "page",
                h1 { class: "page-title", "Employer Dashboard" }
                div {
                    class: "dashboard-grid",
                    DashboardCard { title: "Active listings", body: "You have no open job listings." }
                    DashboardCard { title: "Applicants", body: "New applications will show up here." }
                }
            }
        }
    }
}

/// Job-seeker dashboard
#[component]
pub fn JobSeekerDashboard() -> Element {
    rsx! {
        RoleGate {
            role: UserRole::JobSeeker,
            section {
                class: "page",
                h1 { class: "page-title", "Job Seeker Dashboard" }
                div {
                    class: "dashboard-grid",
                    DashboardCard { title: "Applications", body: "You haven't applied to any jobs yet." }
                    DashboardCard { title: "Saved jobs", body: "Save jobs from the listings to find them here." }
                }
                Link { to: Route::JobListings {}, class: "button button-primary", "Browse jobs" }
            }
        }
    }
}

/// Shows `children` only to a signed-in user with `role`
#[component]
fn RoleGate(role: UserRole, children: Element) -> Element {
    let auth = use_auth();

    if *auth.loading.read() {
        return rsx! { LoadingSpinner {} };
    }

    if !auth.has_role(role) {
        let role_label = role.label();
        return rsx! {
            section {
                class: "page",
                h1 { class: "page-title", "Sign in required" }
                p {
                    class: "page-lead",
                    "Log in with a {role_label} account to view this dashboard."
                }
                Link { to: Route::Login {}, class: "button button-primary", "Login" }
            }
        };
    }

    children
}

#[component]
fn DashboardCard(title: &'static str, body: &'static str) -> Element {
    rsx! {
        div {
            class: "card",
            h2 { class: "card-title", "{title}" }
            p { "{body}" }
        }
    }
}
