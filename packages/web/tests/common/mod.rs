//! Helpers shared by the rendering tests

#![allow(dead_code, non_snake_case)]

use dioxus::prelude::*;
use jobboard_web::auth::AuthContext;
use jobboard_web::types::{AuthUser, UserRole};
use uuid::Uuid;

#[derive(Props, Clone, PartialEq)]
pub struct SignedInProps {
    pub user: Option<AuthUser>,
    pub loading: bool,
    pub children: Element,
}

/// Stands in for `AuthProvider` without contacting the server
#[component]
pub fn SignedIn(props: SignedInProps) -> Element {
    let initial_user = props.user.clone();
    let initial_loading = props.loading;
    let user = use_signal(move || initial_user);
    let loading = use_signal(move || initial_loading);
    use_context_provider(|| AuthContext { user, loading });

    props.children
}

pub fn member(role: UserRole) -> AuthUser {
    AuthUser {
        member_id: Uuid::new_v4(),
        email: "member@example.com".to_string(),
        name: Some("Member".to_string()),
        role,
    }
}

/// Inner HTML of the routed `<main>` region, comments stripped
pub fn routed_region(html: &str) -> String {
    let open = "<main class=\"app-main\">";
    let start = html.find(open).map(|i| i + open.len()).unwrap_or_else(|| panic!("no routed region: {html}"));
    let end = start + html[start..].find("</main>").unwrap_or_else(|| panic!("unclosed routed region: {html}"));

    let mut region = &html[start..end];
    let mut out = String::new();
    while let Some(comment) = region.find("<!--") {
        out.push_str(&region[..comment]);
        match region[comment..].find("-->") {
            Some(close) => region = &region[comment + close + 3..],
            None => region = "",
        }
    }
    out.push_str(region);
    out
}
