//! Command handler implementations

pub mod categories;
pub mod rank;
