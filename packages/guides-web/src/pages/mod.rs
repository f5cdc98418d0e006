//! Application pages

pub mod public;
