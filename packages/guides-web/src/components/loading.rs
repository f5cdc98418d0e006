//! Loading components

use dioxus::prelude::*;

/// Full-page loading spinner, shown until the auth state resolves
#[component]
pub fn FullPageSpinner() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-white",
            div { class: "animate-spin rounded-full h-32 w-32 border-b-2 border-emerald-600" }
        }
    }
}
