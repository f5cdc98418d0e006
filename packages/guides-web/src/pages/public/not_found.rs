//! Fallback for unknown paths

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center bg-white px-4 text-center",
            h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Page not found" }
            p { class: "text-gray-500 mb-6", "Nothing lives at /{path}." }
            Link {
                to: Route::Home {},
                class: "text-emerald-700 hover:text-emerald-800 font-medium",
                "\u{2190} Back to all guides"
            }
        }
    }
}
