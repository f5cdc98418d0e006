//! Listing filter state

use crate::types::ProviderProfile;

/// Label of the "no city restriction" entry in the city dropdown.
pub const ALL_CITIES: &str = "All Cities";

/// Cities offered by the city dropdown, in display order.
pub const ZIMBABWE_CITIES: &[&str] = &[
    "Harare",
    "Bulawayo",
    "Chitungwiza",
    "Mutare",
    "Epworth",
    "Gweru",
    "Kwekwe",
    "Kadoma",
    "Chegutu",
    "Norton",
    "Marondera",
    "Chinhoyi",
    "Masvingo",
    "Zvishavane",
    "Bindura",
    "Beitbridge",
    "Redcliff",
    "Victoria Falls",
    "Hwange",
    "Chiredzi",
    "Kariba",
];

/// City restriction selected in the dropdown
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CityFilter {
    #[default]
    All,
    City(String),
}

impl CityFilter {
    /// Parse a dropdown value. The sentinel label maps to [`CityFilter::All`],
    /// anything else is taken verbatim.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CITIES {
            CityFilter::All
        } else {
            CityFilter::City(value.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CityFilter::All => ALL_CITIES,
            CityFilter::City(city) => city,
        }
    }

    /// Dropdown entries, sentinel first.
    pub fn options() -> impl Iterator<Item = &'static str> {
        std::iter::once(ALL_CITIES).chain(ZIMBABWE_CITIES.iter().copied())
    }

    /// Exact, case-sensitive comparison against the provider's city.
    pub fn admits(&self, city: &str) -> bool {
        match self {
            CityFilter::All => true,
            CityFilter::City(selected) => selected == city,
        }
    }
}

/// Search term plus city restriction, applied together
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ListingFilter {
    pub search: String,
    pub city: CityFilter,
}

impl ListingFilter {
    pub fn new(search: impl Into<String>, city: CityFilter) -> Self {
        Self {
            search: search.into(),
            city,
        }
    }

    /// Providers matching the search term AND the city filter, in their
    /// original order.
    pub fn apply(&self, providers: &[ProviderProfile]) -> Vec<ProviderProfile> {
        let query = self.search.to_lowercase();
        providers
            .iter()
            .filter(|provider| self.city.admits(&provider.city) && matches_search(provider, &query))
            .cloned()
            .collect()
    }
}

// `query` is already lowercased
fn matches_search(provider: &ProviderProfile, query: &str) -> bool {
    provider.display_name.to_lowercase().contains(query)
        || provider
            .bio
            .as_deref()
            .is_some_and(|bio| bio.to_lowercase().contains(query))
        || provider.city.to_lowercase().contains(query)
}
