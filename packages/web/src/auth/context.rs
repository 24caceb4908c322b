//! Authentication context provider

use dioxus::prelude::*;

use crate::types::{AuthUser, UserRole};
use super::server_fns::{get_current_user, logout};

/// Authentication context that provides user state to the entire app
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authenticated user (if any)
    pub user: Signal<Option<AuthUser>>,
    /// Whether auth state is still loading
    pub loading: Signal<bool>,
}

impl AuthContext {
    /// Check if the signed-in user has `role`
    pub fn has_role(&self, role: UserRole) -> bool {
        self.user.read().as_ref().is_some_and(|u| u.role == role)
    }

    /// Refresh the auth state from the server
    pub async fn refresh(mut self) {
        match get_current_user().await {
            Ok(user) => {
                self.user.set(user);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to restore session");
                self.user.set(None);
            }
        }
        self.loading.set(false);
    }

    /// Record a user that just signed in or registered
    pub fn set_user(mut self, user: AuthUser) {
        tracing::debug!(member_id = %user.member_id, "Signed in");
        self.user.set(Some(user));
        self.loading.set(false);
    }

    /// End the server session and clear local state
    pub async fn sign_out(self) {
        if let Err(e) = logout().await {
            tracing::warn!(error = %e, "Failed to clear server session");
        }
        self.clear();
    }

    /// Clear the auth state
    pub fn clear(mut self) {
        self.user.set(None);
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    // Create auth signals
    let user = use_signal(|| None::<AuthUser>);
    let loading = use_signal(|| true);

    // Provided once for the lifetime of the app; navigation does not reset it
    let auth = use_context_provider(|| AuthContext { user, loading });

    // Load initial auth state
    use_effect(move || {
        spawn(async move {
            auth.refresh().await;
        });
    });

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
