//! Login and registration pages

use dioxus::prelude::*;

use crate::auth::{create_account, sign_in, use_auth};
use crate::routes::{dashboard_route, Route};
use crate::types::UserRole;

/// Login page
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_login = move |_| {
        let e = email().trim().to_string();
        let p = password();

        if e.is_empty() || p.is_empty() {
            error.set(Some("Please enter your email and password".to_string()));
            return;
        }

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match sign_in(e, p).await {
                Ok(Some(user)) => {
                    let destination = dashboard_route(user.role);
                    auth.set_user(user);
                    navigator.push(destination);
                }
                Ok(None) => error.set(Some("Invalid email or password".to_string())),
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        section {
            class: "page page-narrow",
            div {
                class: "card",
                h1 { class: "page-title", "Login" }

                if let Some(err) = error() {
                    div { class: "alert", "{err}" }
                }

                form {
                    onsubmit: handle_login,
                    label { class: "field-label", "Email" }
                    input {
                        r#type: "email",
                        class: "field",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                        placeholder: "you@example.com",
                        disabled: is_pending()
                    }
                    label { class: "field-label", "Password" }
                    input {
                        r#type: "password",
                        class: "field",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                        disabled: is_pending()
                    }
                    button {
                        r#type: "submit",
                        class: "button button-primary button-block",
                        disabled: is_pending(),
                        if is_pending() { "Signing in..." } else { "Sign In" }
                    }
                }

                p {
                    class: "form-footer",
                    "New here? "
                    Link { to: Route::Register {}, "Create an account" }
                }
            }
        }
    }
}

/// Registration page
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| UserRole::JobSeeker);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_register = move |_| {
        let n = name().trim().to_string();
        let e = email().trim().to_string();
        let p = password();

        if let Some(message) = validate_registration(&n, &e, &p) {
            error.set(Some(message.to_string()));
            return;
        }

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match create_account(n, e, p, role()).await {
                Ok(user) => {
                    let destination = dashboard_route(user.role);
                    auth.set_user(user);
                    navigator.push(destination);
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        section {
            class: "page page-narrow",
            div {
                class: "card",
                h1 { class: "page-title", "Create an account" }

                if let Some(err) = error() {
                    div { class: "alert", "{err}" }
                }

                form {
                    onsubmit: handle_register,
                    label { class: "field-label", "Name" }
                    input {
                        r#type: "text",
                        class: "field",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                        disabled: is_pending()
                    }
                    label { class: "field-label", "Email" }
                    input {
                        r#type: "email",
                        class: "field",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                        disabled: is_pending()
                    }
                    label { class: "field-label", "Password" }
                    input {
                        r#type: "password",
                        class: "field",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                        disabled: is_pending()
                    }

                    fieldset {
                        class: "role-picker",
                        legend { class: "field-label", "I am a" }
                        for option in UserRole::variants().iter().copied() {
                            label {
                                key: "{option:?}",
                                class: "role-option",
                                input {
                                    r#type: "radio",
                                    name: "role",
                                    checked: role() == option,
                                    onchange: move |_| role.set(option),
                                    disabled: is_pending()
                                }
                                "{option.label()}"
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "button button-primary button-block",
                        disabled: is_pending(),
                        if is_pending() { "Creating account..." } else { "Register" }
                    }
                }

                p {
                    class: "form-footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }
    }
}

/// Minimal client-side checks before calling the API
pub fn validate_registration(name: &str, email: &str, password: &str) -> Option<&'static str> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Some("Please fill in every field");
    }
    if !email.contains('@') {
        return Some("Please enter a valid email address");
    }
    if password.chars().count() < 8 {
        return Some("Password must be at least 8 characters");
    }
    None
}
