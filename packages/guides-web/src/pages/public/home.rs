//! Home page component

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{
    FullPageSpinner, Icon, IconKind, ProviderCard, ProviderCardSkeleton, SiteFooter, SiteHeader,
};
use crate::listing::ProviderListing;
use crate::routes::AUTH_PATH;
use crate::state::{CityFilter, ListingFilter};
use crate::view::{PageState, SKELETON_CARD_COUNT};

/// Home page - lists active guides with search and city filtering
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let mut search_term = use_signal(String::new);
    let mut selected_city = use_signal(CityFilter::default);

    if auth.is_loading() {
        return rsx! { FullPageSpinner {} };
    }

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-br from-emerald-50 via-white to-amber-50",

            SiteHeader {}

            // Hero Section
            section {
                class: "bg-gradient-to-r from-emerald-100/60 via-emerald-50 to-amber-100/60 py-20",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center",
                    h2 {
                        class: "text-4xl md:text-6xl font-bold text-gray-900 mb-6",
                        "Discover Amazing "
                        span { class: "text-emerald-700", "Social Guides" }
                        br {}
                        "in Zimbabwe"
                    }
                    p {
                        class: "text-xl text-gray-600 mb-8 max-w-3xl mx-auto",
                        "Connect with professional social guides and personal hosts across all cities in Zimbabwe. "
                        "Find the perfect companion for your social events, tours, and experiences."
                    }

                    // Search and Filter Bar
                    div {
                        class: "max-w-4xl mx-auto bg-white/95 rounded-2xl p-6 shadow-lg border",
                        div {
                            class: "flex flex-col md:flex-row gap-4",
                            div {
                                class: "flex-1 relative",
                                div {
                                    class: "absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none",
                                    Icon { kind: IconKind::Search, class: "h-5 w-5 text-gray-400" }
                                }
                                input {
                                    r#type: "text",
                                    placeholder: "Search by name, bio, or city...",
                                    value: "{search_term}",
                                    oninput: move |e| search_term.set(e.value()),
                                    class: "w-full pl-10 h-12 text-lg border border-gray-200 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-500"
                                }
                            }
                            select {
                                class: "md:w-48 h-12 px-3 border border-gray-200 rounded-lg bg-white",
                                onchange: move |e| selected_city.set(CityFilter::from_value(&e.value())),
                                for city in CityFilter::options() {
                                    option {
                                        key: "{city}",
                                        value: "{city}",
                                        selected: selected_city.read().label() == city,
                                        "{city}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Providers Grid
            section {
                class: "py-20",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    h3 { class: "text-3xl font-bold text-gray-900 mb-2", "Featured Social Guides" }

                    // Header, hero and search stay interactive while the directory loads
                    SuspenseBoundary {
                        fallback: |_| rsx! {
                            GuideCount { count: 0 }
                            ProviderSkeletons {}
                        },
                        FetchedProviders { search: search_term(), city: selected_city() }
                    }
                }
            }

            // CTA Section
            section {
                class: "bg-gradient-to-r from-emerald-100/60 via-emerald-50 to-amber-100/60 py-20",
                div {
                    class: "max-w-4xl mx-auto text-center px-4 sm:px-6 lg:px-8",
                    h3 {
                        class: "text-3xl md:text-4xl font-bold text-gray-900 mb-6",
                        "Ready to Start Your Journey?"
                    }
                    p {
                        class: "text-xl text-gray-600 mb-8 max-w-2xl mx-auto",
                        "Join our platform today. Connect with amazing people, build lasting relationships, "
                        "and create unforgettable experiences across Zimbabwe."
                    }
                    div {
                        class: "flex flex-col sm:flex-row gap-4 justify-center",
                        a {
                            href: AUTH_PATH,
                            class: "inline-flex items-center justify-center px-8 py-3 rounded-lg text-white bg-emerald-600 hover:bg-emerald-700 font-medium",
                            Icon { kind: IconKind::User, class: "h-5 w-5 mr-2" }
                            "Find a Guide"
                        }
                        a {
                            href: AUTH_PATH,
                            class: "inline-flex items-center justify-center px-8 py-3 rounded-lg border border-gray-300 text-gray-800 hover:bg-white font-medium",
                            Icon { kind: IconKind::Plus, class: "h-5 w-5 mr-2" }
                            "Become a Guide"
                        }
                    }
                }
            }

            SiteFooter {}
        }
    }
}

/// Reads the directory, suspending the nearest boundary until it resolves.
#[component]
fn FetchedProviders(search: String, city: CityFilter) -> Element {
    // Runs once per page load. The task belongs to this component's scope, so
    // a response arriving after unmount is dropped with it.
    let fetch = use_server_future(fetch_active_providers)?;

    let listing = use_memo(move || {
        let value = fetch.value();
        let response = value.read();
        listing_from_response(response.as_ref())
    });

    match listing() {
        Some(listing) => rsx! { ProviderResults { listing, search, city } },
        None => rsx! {
            GuideCount { count: 0 }
            ProviderSkeletons {}
        },
    }
}

// A transport failure of the server function is treated like a backend one
fn listing_from_response(
    response: Option<&Result<ProviderListing, ServerFnError>>,
) -> Option<ProviderListing> {
    match response {
        None => None,
        Some(Ok(listing)) => Some(listing.clone()),
        Some(Err(e)) => Some(ProviderListing::from_error(e)),
    }
}

/// Filtered cards, or the empty state when nothing is left
#[component]
fn ProviderResults(listing: ProviderListing, search: String, city: CityFilter) -> Element {
    let auth = use_auth();

    // Props are compared before re-rendering, so this reruns only when the
    // listing, search term, or city change
    let visible = ListingFilter::new(search, city).apply(&listing.providers);
    let visible_count = visible.len();
    let state = PageState::resolve(
        auth.is_loading(),
        auth.is_authenticated(),
        Some(&listing),
        visible_count,
    );

    rsx! {
        GuideCount { count: visible_count }

        {match state {
            PageState::AuthLoading | PageState::ProvidersLoading => rsx! { ProviderSkeletons {} },
            PageState::Empty { invite_to_join, fetch_failed } => rsx! {
                EmptyState { invite_to_join: invite_to_join, fetch_failed: fetch_failed }
            },
            PageState::Populated => rsx! {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                    for provider in visible.iter() {
                        ProviderCard { key: "{provider.id}", provider: provider.clone() }
                    }
                }
            },
        }}
    }
}

#[component]
fn GuideCount(count: usize) -> Element {
    rsx! {
        p { class: "text-gray-500 mb-12", "{count} professional guides available" }
    }
}

#[component]
fn ProviderSkeletons() -> Element {
    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
            for i in 0..SKELETON_CARD_COUNT {
                ProviderCardSkeleton { key: "{i}" }
            }
        }
    }
}

/// Shown when no provider survives the filters, or the fetch failed
#[component]
fn EmptyState(invite_to_join: bool, fetch_failed: bool) -> Element {
    let hint = if fetch_failed {
        "We couldn't load guides right now. Please check back later."
    } else {
        "Try adjusting your search criteria or check back later for new guides."
    };

    rsx! {
        div {
            class: "text-center py-20",
            div {
                class: "w-24 h-24 bg-gray-100 rounded-full mx-auto mb-6 flex items-center justify-center",
                Icon { kind: IconKind::Search, class: "h-8 w-8 text-gray-400" }
            }
            h3 { class: "text-2xl font-semibold text-gray-900 mb-4", "No guides found" }
            p { class: "text-gray-500 mb-8", "{hint}" }
            if invite_to_join {
                a {
                    href: AUTH_PATH,
                    class: "inline-flex items-center px-6 py-3 rounded-lg text-white bg-emerald-600 hover:bg-emerald-700 font-medium",
                    Icon { kind: IconKind::Plus, class: "h-4 w-4 mr-2" }
                    "Become a Guide"
                }
            }
        }
    }
}

/// Server function reading the active directory.
///
/// Never reports a backend failure as an error: misconfiguration and
/// Supabase errors are logged and come back as an empty, failed listing.
#[server]
async fn fetch_active_providers() -> Result<ProviderListing, ServerFnError> {
    let directory = match crate::config::get()
        .and_then(crate::listing::ProviderDirectory::from_config)
    {
        Ok(directory) => directory,
        Err(e) => return Ok(ProviderListing::from_error(&format!("{e:#}"))),
    };

    Ok(crate::listing::load_listing(&directory).await)
}
