//! Authentication state and session server functions

mod context;
mod server_fns;

pub use context::*;
