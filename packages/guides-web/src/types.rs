//! Type definitions for Supabase API responses
//!
//! Rows arrive from PostgREST in the table's snake_case column names.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Provider Types
// ============================================================================

/// A listed social guide, one row of `provider_profiles`.
///
/// Columns the page never reads (`subscription_status`, `created_at`,
/// `user_id`, ...) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    pub city: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_verified: bool,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

// ============================================================================
// Auth Types
// ============================================================================

/// Signed-in user as reported by Supabase Auth (`GET /auth/v1/user`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl AuthUser {
    /// Short label for the header, falling back from email to phone.
    pub fn label(&self) -> &str {
        self.email
            .as_deref()
            .filter(|e| !e.is_empty())
            .or(self.phone.as_deref().filter(|p| !p.is_empty()))
            .unwrap_or("Account")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn provider_row_ignores_unknown_columns() {
        let row = json!({
            "id": "p-1",
            "user_id": "u-1",
            "display_name": "Tino",
            "bio": "City tours",
            "phone_number": "+263 77 123 4567",
            "whatsapp_number": null,
            "city": "Harare",
            "profile_image_url": null,
            "is_verified": true,
            "subscription_status": "active",
            "created_at": "2024-05-01T10:00:00+00:00"
        });

        let provider: ProviderProfile = serde_json::from_value(row).unwrap();

        assert_eq!(provider.display_name, "Tino");
        assert_eq!(provider.bio.as_deref(), Some("City tours"));
        assert_eq!(provider.whatsapp_number, None);
        assert!(provider.is_verified);
    }

    #[test]
    fn null_or_missing_verification_is_unverified() {
        let null_flag: ProviderProfile = serde_json::from_value(json!({
            "id": "p-2",
            "display_name": "Rue",
            "city": "Bulawayo",
            "is_verified": null
        }))
        .unwrap();
        let missing_flag: ProviderProfile = serde_json::from_value(json!({
            "id": "p-3",
            "display_name": "Farai",
            "city": "Mutare"
        }))
        .unwrap();

        assert!(!null_flag.is_verified);
        assert!(!missing_flag.is_verified);
        assert_eq!(missing_flag.bio, None);
    }

    #[test]
    fn user_label_prefers_email_then_phone() {
        let id = Uuid::new_v4();
        let with_email = AuthUser {
            id,
            email: Some("tino@example.com".into()),
            phone: Some("263771234567".into()),
        };
        let phone_only = AuthUser {
            id,
            email: Some(String::new()),
            phone: Some("263771234567".into()),
        };
        let anonymous = AuthUser {
            id,
            email: None,
            phone: None,
        };

        assert_eq!(with_email.label(), "tino@example.com");
        assert_eq!(phone_only.label(), "263771234567");
        assert_eq!(anonymous.label(), "Account");
    }
}
