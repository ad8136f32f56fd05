//! FromStr-backed value types used by the CLI argument parser.

pub mod weights;


pub use weights::WeightSpec;

// Sort keys and directions are engine types; clap parses them via their
// FromStr impls.
pub use crate::engine::{SortDirection, SortKey};
