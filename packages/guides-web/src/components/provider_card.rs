//! Provider card component

use dioxus::prelude::*;

use super::{Icon, IconKind};
use crate::contact::{tel_href, whatsapp_href};
use crate::types::ProviderProfile;

const FALLBACK_BIO: &str = "Professional social guide available for various occasions.";

/// Card for a single listed guide
#[component]
pub fn ProviderCard(provider: ProviderProfile) -> Element {
    let call_href = tel_href(provider.phone_number.as_deref());
    let whatsapp_link = whatsapp_href(provider.whatsapp_number.as_deref());
    let bio = provider
        .bio
        .as_deref()
        .filter(|bio| !bio.is_empty())
        .unwrap_or(FALLBACK_BIO);
    let image_url = provider
        .profile_image_url
        .as_deref()
        .filter(|url| !url.is_empty());

    rsx! {
        div {
            class: "rounded-xl bg-white/95 p-6 shadow-sm hover:shadow-lg transition-shadow duration-300 flex flex-col h-full",

            // Avatar, name, city
            div {
                class: "flex items-center gap-3 mb-4",
                if let Some(src) = image_url {
                    img {
                        class: "w-16 h-16 rounded-full object-cover",
                        src: "{src}",
                        alt: "{provider.display_name}",
                    }
                } else {
                    div {
                        class: "w-16 h-16 bg-gradient-to-r from-emerald-100 to-amber-100 rounded-full flex items-center justify-center",
                        Icon { kind: IconKind::User, class: "h-8 w-8 text-emerald-700" }
                    }
                }
                div {
                    h3 {
                        class: "flex items-center gap-2 text-lg font-semibold text-gray-900",
                        "{provider.display_name}"
                        if provider.is_verified {
                            span {
                                class: "inline-flex items-center gap-1 px-2 py-0.5 rounded-full text-xs font-medium bg-gray-100 text-gray-700",
                                Icon { kind: IconKind::Star, class: "h-3 w-3" }
                                "Verified"
                            }
                        }
                    }
                    p {
                        class: "flex items-center gap-1 mt-1 text-sm text-gray-500",
                        Icon { kind: IconKind::MapPin, class: "h-3 w-3" }
                        "{provider.city}"
                    }
                }
            }

            p {
                class: "text-sm text-gray-600 mb-6 line-clamp-3 flex-grow",
                "{bio}"
            }

            // Contact buttons
            div {
                class: "flex gap-2",
                if let Some(href) = &call_href {
                    a {
                        href: "{href}",
                        class: "flex-1 inline-flex items-center justify-center gap-2 px-3 py-2 border border-gray-200 rounded-lg text-sm font-medium text-gray-700 hover:bg-gray-50 transition-colors",
                        Icon { kind: IconKind::Phone, class: "h-4 w-4" }
                        "Call"
                    }
                }
                if let Some(href) = &whatsapp_link {
                    a {
                        href: "{href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "flex-1 inline-flex items-center justify-center gap-2 px-3 py-2 bg-green-600 text-white rounded-lg text-sm font-medium hover:bg-green-700 transition-colors",
                        Icon { kind: IconKind::Chat, class: "h-4 w-4" }
                        "WhatsApp"
                    }
                }
            }
        }
    }
}

/// Skeleton loader for provider cards
#[component]
pub fn ProviderCardSkeleton() -> Element {
    rsx! {
        div {
            class: "rounded-xl bg-white p-6 shadow-sm animate-pulse",
            div { class: "w-16 h-16 bg-gray-200 rounded-full mb-4" }
            div { class: "h-6 bg-gray-200 rounded mb-2" }
            div { class: "h-4 w-3/4 bg-gray-200 rounded mb-4" }
            div { class: "h-20 bg-gray-200 rounded" }
        }
    }
}
