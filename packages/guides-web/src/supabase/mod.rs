//! Supabase client for reading the directory and resolving sessions

mod client;
mod query;

pub use client::*;
pub use query::*;
