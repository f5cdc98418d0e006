//! Header and footer shared by the public pages

use dioxus::prelude::*;

use super::{Icon, IconKind};
use crate::auth::use_auth;
use crate::routes::{AUTH_PATH, DASHBOARD_PATH};

/// Sticky site header with the auth-aware action buttons
#[component]
pub fn SiteHeader() -> Element {
    let auth = use_auth();

    let handle_sign_out = move |_| {
        spawn(auth.sign_out());
    };

    rsx! {
        header {
            class: "bg-white/95 backdrop-blur-sm border-b shadow-sm sticky top-0 z-50",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div {
                    class: "flex justify-between items-center h-16",

                    // Brand
                    div {
                        class: "flex items-center space-x-4",
                        h1 {
                            class: "text-2xl font-bold text-emerald-700",
                            "Zimbabwe Vibes"
                        }
                        span {
                            class: "hidden sm:inline-flex px-2.5 py-0.5 rounded-full text-xs font-medium bg-gray-100 text-gray-700",
                            "Social Guides Platform"
                        }
                    }

                    // Account actions
                    div {
                        class: "flex items-center space-x-2",
                        if let Some(user) = auth.user.read().as_ref() {
                            span {
                                class: "hidden md:inline text-sm text-gray-600 mr-2",
                                "{user.label()}"
                            }
                            a {
                                href: DASHBOARD_PATH,
                                class: "inline-flex items-center px-3 py-1.5 border border-gray-200 rounded-md text-sm font-medium text-gray-700 hover:bg-gray-50",
                                Icon { kind: IconKind::User, class: "h-4 w-4 mr-2" }
                                "Dashboard"
                            }
                            button {
                                class: "inline-flex items-center px-3 py-1.5 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100",
                                onclick: handle_sign_out,
                                Icon { kind: IconKind::SignOut, class: "h-4 w-4 mr-2" }
                                "Sign Out"
                            }
                        } else {
                            a {
                                href: AUTH_PATH,
                                class: "inline-flex items-center px-3 py-1.5 border border-gray-200 rounded-md text-sm font-medium text-gray-700 hover:bg-gray-50",
                                "Sign In"
                            }
                            a {
                                href: AUTH_PATH,
                                class: "inline-flex items-center px-3 py-1.5 rounded-md text-sm font-medium text-white bg-emerald-600 hover:bg-emerald-700",
                                Icon { kind: IconKind::Plus, class: "h-4 w-4 mr-2" }
                                "Join Now"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Site footer
#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer {
            class: "bg-white border-t",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 text-center",
                h4 {
                    class: "text-2xl font-bold mb-4 text-emerald-700",
                    "Zimbabwe Vibes"
                }
                p {
                    class: "text-gray-500 mb-6 max-w-2xl mx-auto",
                    "Connecting people across Zimbabwe for authentic social experiences and meaningful connections."
                }
                div {
                    class: "flex justify-center space-x-6 text-sm text-gray-500",
                    span { "\u{00A9} 2024 Zimbabwe Vibes" }
                    span { "\u{2022}" }
                    span { "Professional Social Guides Platform" }
                }
            }
        }
    }
}
