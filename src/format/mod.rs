//! Taxon name formatting.

pub mod names;

pub use names::{taxa_remove_unclassified, taxa_shorten_name};
