//! Server functions for authentication
//!
//! These run on the server and handle session management.

use dioxus::prelude::*;

use crate::types::{AuthUser, UserRole};

/// Sign in with email and password.
///
/// Returns the signed-in user, or `None` when the credentials are rejected.
#[server]
pub async fn sign_in(email: String, password: String) -> Result<Option<AuthUser>, ServerFnError> {
    use crate::graphql::{server_client, LOGIN};
    use crate::types::LoginResponse;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Variables {
        email: String,
        password: String,
    }

    let result: LoginResponse = server_client()
        .mutate(LOGIN, Some(Variables { email, password }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    match result.login {
        Some(token) => establish_session(&token).await.map(Some),
        None => Ok(None),
    }
}

/// Create an account and sign in as the new member
#[server]
pub async fn create_account(
    name: String,
    email: String,
    password: String,
    role: UserRole,
) -> Result<AuthUser, ServerFnError> {
    use crate::graphql::{server_client, REGISTER};
    use crate::types::RegisterResponse;
    use serde::Serialize;

    #[derive(Serialize)]
    struct RegisterInput {
        name: String,
        email: String,
        password: String,
        role: UserRole,
    }

    #[derive(Serialize)]
    struct Variables {
        input: RegisterInput,
    }

    let variables = Variables {
        input: RegisterInput {
            name,
            email,
            password,
            role,
        },
    };

    let result: RegisterResponse = server_client()
        .mutate(REGISTER, Some(variables))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let token = result
        .register
        .ok_or_else(|| ServerFnError::new("Registration did not return a session"))?;

    establish_session(&token).await
}

/// Get the current authenticated user from the session
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    get_session_user().await
}

/// Logout - clear the session
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    clear_session().await
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
const SESSION_USER_KEY: &str = "user";

#[cfg(feature = "server")]
async fn establish_session(token: &str) -> Result<AuthUser, ServerFnError> {
    let user = super::decode_token_claims(token).map_err(|e| ServerFnError::new(e.to_string()))?;
    set_session_user(&user).await?;

    tracing::info!(member_id = %user.member_id, role = ?user.role, "Session established");
    Ok(user)
}

#[cfg(feature = "server")]
async fn session() -> Result<tower_sessions::Session, ServerFnError> {
    dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))
}

#[cfg(feature = "server")]
async fn set_session_user(user: &AuthUser) -> Result<(), ServerFnError> {
    session()
        .await?
        .insert(SESSION_USER_KEY, user)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))
}

#[cfg(feature = "server")]
async fn get_session_user() -> Result<Option<AuthUser>, ServerFnError> {
    session()
        .await?
        .get(SESSION_USER_KEY)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get user from session: {}", e)))
}

#[cfg(feature = "server")]
async fn clear_session() -> Result<(), ServerFnError> {
    session()
        .await?
        .flush()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to clear session: {}", e)))
}
