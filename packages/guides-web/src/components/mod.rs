//! Reusable UI components

mod icons;
mod loading;
mod provider_card;
mod site_chrome;

pub use icons::*;
pub use loading::*;
pub use provider_card::*;
pub use site_chrome::*;
