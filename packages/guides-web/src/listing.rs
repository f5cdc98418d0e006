//! Provider directory fetch
//!
//! The listing page reads the directory exactly once per load. Whatever goes
//! wrong is logged and turned into an empty, `Failed` listing so the page can
//! always render.

use std::fmt::Display;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::supabase::{ClientError, SelectQuery, SupabaseClient};
use crate::types::ProviderProfile;

/// Only profiles with this subscription status are publicly listed.
pub const ACTIVE_SUBSCRIPTION: &str = "active";

/// Query for every actively subscribed profile, newest first
pub fn active_providers_query(table: &str) -> SelectQuery {
    SelectQuery::from(table)
        .eq("subscription_status", ACTIVE_SUBSCRIPTION)
        .order("created_at", false)
}

/// Somewhere provider profiles can be read from
pub trait ProviderSource {
    fn active_providers(&self) -> impl Future<Output = Result<Vec<ProviderProfile>, ClientError>>;
}

/// The `provider_profiles` table of a Supabase project
pub struct ProviderDirectory {
    client: SupabaseClient,
    table: String,
}

impl ProviderDirectory {
    pub fn new(client: SupabaseClient, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(config.supabase_client()?, config.provider_table.clone()))
    }
}

impl ProviderSource for ProviderDirectory {
    async fn active_providers(&self) -> Result<Vec<ProviderProfile>, ClientError> {
        self.client
            .select(&active_providers_query(&self.table))
            .await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListingStatus {
    #[default]
    Loaded,
    /// The fetch failed; `providers` is empty.
    Failed,
}

/// Outcome of the one directory read a page load performs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProviderListing {
    pub providers: Vec<ProviderProfile>,
    pub status: ListingStatus,
}

impl ProviderListing {
    pub fn loaded(providers: Vec<ProviderProfile>) -> Self {
        Self {
            providers,
            status: ListingStatus::Loaded,
        }
    }

    /// Log `error` and produce the empty listing shown in its place.
    pub fn from_error(error: &dyn Display) -> Self {
        tracing::error!(error = %error, "Error fetching providers");
        Self {
            providers: Vec::new(),
            status: ListingStatus::Failed,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == ListingStatus::Failed
    }
}

/// Read the directory once. Never fails: errors become an empty listing.
pub async fn load_listing<S: ProviderSource>(source: &S) -> ProviderListing {
    match source.active_providers().await {
        Ok(providers) => {
            tracing::debug!(count = providers.len(), "Loaded providers");
            ProviderListing::loaded(providers)
        }
        Err(e) => ProviderListing::from_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::cell::Cell;

    struct StaticSource {
        providers: Vec<ProviderProfile>,
        calls: Cell<usize>,
    }

    impl ProviderSource for StaticSource {
        async fn active_providers(&self) -> Result<Vec<ProviderProfile>, ClientError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.providers.clone())
        }
    }

    struct FailingSource;

    impl ProviderSource for FailingSource {
        async fn active_providers(&self) -> Result<Vec<ProviderProfile>, ClientError> {
            Err(ClientError::Api {
                status: 500,
                message: "database offline".to_string(),
            })
        }
    }

    fn provider(id: &str, name: &str) -> ProviderProfile {
        ProviderProfile {
            id: id.to_string(),
            display_name: name.to_string(),
            bio: None,
            phone_number: None,
            whatsapp_number: None,
            city: "Harare".to_string(),
            profile_image_url: None,
            is_verified: false,
        }
    }

    #[tokio::test]
    async fn successful_fetch_replaces_the_list() {
        let source = StaticSource {
            providers: vec![provider("1", "Tino"), provider("2", "Rue")],
            calls: Cell::new(0),
        };

        let listing = load_listing(&source).await;

        assert_eq!(source.calls.get(), 1);
        assert_eq!(listing.status, ListingStatus::Loaded);
        assert_eq!(listing.providers.len(), 2);
    }

    #[tokio::test]
    async fn empty_dataset_is_loaded_not_failed() {
        let source = StaticSource {
            providers: Vec::new(),
            calls: Cell::new(0),
        };

        let listing = load_listing(&source).await;

        assert!(listing.providers.is_empty());
        assert!(!listing.is_failed());
    }

    #[tokio::test]
    async fn failed_fetch_becomes_empty_failed_listing() {
        let listing = load_listing(&FailingSource).await;

        assert!(listing.providers.is_empty());
        assert!(listing.is_failed());
    }

    #[test]
    fn directory_query_filters_active_newest_first() {
        let params = active_providers_query("provider_profiles").params();

        assert!(params.contains(&("subscription_status".to_string(), "eq.active".to_string())));
        assert!(params.contains(&("order".to_string(), "created_at.desc".to_string())));
    }

    #[tokio::test]
    async fn directory_reads_rows_from_supabase() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/rest/v1/provider_profiles")
                    .query_param("subscription_status", "eq.active");
                then.status(200).json_body(json!([
                    {
                        "id": "2",
                        "display_name": "Rue",
                        "bio": null,
                        "phone_number": null,
                        "whatsapp_number": "+263 71 000 0000",
                        "city": "Bulawayo",
                        "profile_image_url": null,
                        "is_verified": false,
                        "subscription_status": "active"
                    }
                ]));
            })
            .await;
        let client = SupabaseClient::new(&server.base_url(), "anon").unwrap();

        let listing = load_listing(&ProviderDirectory::new(client, "provider_profiles")).await;

        assert_eq!(listing.status, ListingStatus::Loaded);
        assert_eq!(listing.providers[0].display_name, "Rue");
    }

    #[tokio::test]
    async fn unreachable_directory_is_a_failed_listing() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/rest/v1/provider_profiles");
                then.status(401).json_body(json!({ "message": "Invalid API key" }));
            })
            .await;
        let client = SupabaseClient::new(&server.base_url(), "wrong").unwrap();

        let listing = load_listing(&ProviderDirectory::new(client, "provider_profiles")).await;

        assert!(listing.is_failed());
        assert!(listing.providers.is_empty());
    }
}
