//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::public::{Home, PageNotFound};

/// Sign-in / registration flow, served outside this app.
pub const AUTH_PATH: &str = "/auth";

/// Provider dashboard, served outside this app.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}
