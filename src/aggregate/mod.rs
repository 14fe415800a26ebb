//! Aggregation of taxa across the taxonomy tree.

pub mod level;
pub mod terminal;

pub use level::taxa_by_level;
pub use terminal::terminal_taxa;
