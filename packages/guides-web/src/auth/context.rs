//! Authentication context provider

use dioxus::prelude::*;

use super::server_fns::{get_current_user, sign_out};
use crate::types::AuthUser;

/// Authentication context that provides user state to the entire app
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authenticated user (if any)
    pub user: Signal<Option<AuthUser>>,
    /// Whether auth state is still loading
    pub loading: Signal<bool>,
}

impl AuthContext {
    /// Check if the user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    /// Refresh the auth state from the server
    pub async fn refresh(mut self) {
        match get_current_user().await {
            Ok(user) => {
                self.user.set(user);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to resolve current user");
                self.user.set(None);
            }
        }
        self.loading.set(false);
    }

    /// End the session on the server, then forget the user locally
    pub async fn sign_out(mut self) {
        if let Err(e) = sign_out().await {
            tracing::error!(error = %e, "Sign out failed");
            return;
        }
        self.user.set(None);
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    // Create auth signals
    let user = use_signal(|| None::<AuthUser>);
    let loading = use_signal(|| true);

    // Provide to children
    let auth = use_context_provider(|| AuthContext { user, loading });

    // Load initial auth state
    use_effect(move || {
        spawn(auth.refresh());
    });

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
