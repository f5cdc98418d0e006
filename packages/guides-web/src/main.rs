//! Zimbabwe Vibes - Dioxus Fullstack Web Application
//!
//! Public listing of social guides, read from a Supabase `provider_profiles`
//! table and filtered client-side by search term and city.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```
//!
//! The server reads `SUPABASE_URL` and `SUPABASE_ANON_KEY` (and optionally
//! `PROVIDER_TABLE`) from the environment or a `.env` file.

#![allow(non_snake_case)]

mod app;
mod auth;
mod components;
mod config;
mod contact;
mod listing;
mod pages;
mod routes;
mod state;
mod supabase;
mod types;
mod view;

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use dioxus::prelude::*;
    use tower_sessions::{MemoryStore, SessionManagerLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,guides_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Zimbabwe Vibes");

    // Fail fast on missing Supabase settings; server functions share this copy
    let config = config::Config::from_env().context("Failed to load configuration")?;
    let config = config::init(config);
    config.supabase_client()?;
    tracing::info!(supabase_url = %config.supabase_url, table = %config.provider_table, "Configuration loaded");

    let serve_config =
        ServeConfig::new().map_err(|e| anyhow::anyhow!("Failed to load index.html: {e}"))?;
    let router = axum::Router::new()
        .serve_dioxus_application(serve_config, app::App)
        .layer(SessionManagerLayer::new(MemoryStore::default()));

    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, router.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    // Hydrate the server-rendered page in the browser (also installs the logger)
    dioxus::launch(app::App);
}
