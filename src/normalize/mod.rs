//! Normalization of abundance data.
//!
//! - **Relative abundance**: per-sample proportions (total sum scaling)

pub mod relab;

pub use relab::{relative_abundance, relative_abundance_table};
