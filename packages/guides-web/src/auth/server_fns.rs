//! Server functions for authentication
//!
//! These run on the server and read the Supabase access token that the
//! sign-in flow stores in the session.

use dioxus::prelude::*;

use crate::types::AuthUser;

/// Session key holding the Supabase access token of the signed-in user.
#[cfg(feature = "server")]
const ACCESS_TOKEN_KEY: &str = "supabase_access_token";

/// Get the current authenticated user from the session
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    let Some(token) = session_access_token().await? else {
        return Ok(None);
    };

    let client = server_supabase_client()?;
    match client.get_user(&token).await {
        Ok(user) => Ok(Some(user)),
        Err(e) if e.is_unauthorized() => {
            tracing::debug!(error = %e, "Stored access token rejected, clearing session");
            clear_session().await?;
            Ok(None)
        }
        Err(e) => Err(ServerFnError::new(e.to_string())),
    }
}

/// Sign out - revoke the Supabase session and clear ours
#[server]
pub async fn sign_out() -> Result<(), ServerFnError> {
    if let Some(token) = session_access_token().await? {
        let client = server_supabase_client()?;
        // The local session is cleared even if Supabase is unreachable
        if let Err(e) = client.sign_out(&token).await {
            tracing::warn!(error = %e, "Supabase sign-out failed");
        }
    }

    clear_session().await
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
fn server_supabase_client() -> Result<crate::supabase::SupabaseClient, ServerFnError> {
    crate::config::get()
        .and_then(|config| config.supabase_client())
        .map_err(|e| ServerFnError::new(format!("{e:#}")))
}

#[cfg(feature = "server")]
async fn current_session() -> Result<tower_sessions::Session, ServerFnError> {
    dioxus::fullstack::prelude::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {:?}", e)))
}

#[cfg(feature = "server")]
async fn session_access_token() -> Result<Option<String>, ServerFnError> {
    current_session()
        .await?
        .get::<String>(ACCESS_TOKEN_KEY)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to read session: {}", e)))
}

#[cfg(feature = "server")]
async fn clear_session() -> Result<(), ServerFnError> {
    current_session()
        .await?
        .flush()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to clear session: {}", e)))
}
