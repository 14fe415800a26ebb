//! Profiling primitives for understanding taxon table characteristics.

mod summary;

pub use summary::{profile_table, TableProfile};
