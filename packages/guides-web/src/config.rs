use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

use crate::supabase::SupabaseClient;

const DEFAULT_PROVIDER_TABLE: &str = "provider_profiles";

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Install the configuration loaded at startup. Call this once from `main`;
/// later calls keep the first value.
pub fn init(config: Config) -> &'static Config {
    CONFIG.get_or_init(|| config)
}

/// The configuration installed by [`init`]
pub fn get() -> Result<&'static Config> {
    CONFIG.get().context("Configuration was not initialized")
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub provider_table: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            supabase_url: lookup("SUPABASE_URL")
                .filter(|v| !v.is_empty())
                .context("SUPABASE_URL must be set")?,
            supabase_anon_key: lookup("SUPABASE_ANON_KEY")
                .filter(|v| !v.is_empty())
                .context("SUPABASE_ANON_KEY must be set")?,
            provider_table: lookup("PROVIDER_TABLE")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_PROVIDER_TABLE.to_string()),
        })
    }

    /// Client for the configured Supabase project
    pub fn supabase_client(&self) -> Result<SupabaseClient> {
        SupabaseClient::new(&self.supabase_url, self.supabase_anon_key.clone())
            .context("SUPABASE_URL is not a valid URL")
    }
}
