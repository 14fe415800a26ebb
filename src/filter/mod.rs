//! Filtering primitives for taxon tables.

pub mod level;
pub mod top;
pub mod zero;

pub use level::filter_taxa_level;
pub use top::{top_rows, TopMetric};
pub use zero::filter_zero_rows;
