//! Which body the listing page renders

use crate::listing::ProviderListing;

/// Placeholder cards shown while the directory loads.
pub const SKELETON_CARD_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// Auth status unresolved: full-page spinner, nothing else.
    AuthLoading,
    ProvidersLoading,
    Empty {
        /// Show the "Become a Guide" call-to-action (nobody signed in).
        invite_to_join: bool,
        fetch_failed: bool,
    },
    Populated,
}

impl PageState {
    /// `listing` is `None` while the fetch is in flight; `visible` is the
    /// number of providers left after filtering.
    pub fn resolve(
        auth_loading: bool,
        signed_in: bool,
        listing: Option<&ProviderListing>,
        visible: usize,
    ) -> Self {
        if auth_loading {
            return PageState::AuthLoading;
        }
        match listing {
            None => PageState::ProvidersLoading,
            Some(listing) if visible == 0 => PageState::Empty {
                invite_to_join: !signed_in,
                fetch_failed: listing.is_failed(),
            },
            Some(_) => PageState::Populated,
        }
    }
}
