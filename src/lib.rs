//! Composable Taxonomic Profile Library
//!
//! This library provides transforms for taxonomic abundance profiles such
//! as those produced by MetaPhlAn: rank-prefixed taxa
//! (`k__Bacteria;p__Firmicutes;...`) paired row-by-row with per-sample
//! abundances.
//!
//! # Overview
//!
//! The library is organized into composable modules:
//!
//! - **data**: Core data structures (Rank, TaxonPath, TaxonTable)
//! - **aggregate**: Level aggregation and terminal-taxa extraction
//! - **filter**: Zero-row, rank-level and top-N filtering
//! - **normalize**: Relative abundance
//! - **format**: Canonical and shortened taxon names
//! - **profile**: Table profiling
//! - **pipeline**: Pipeline composition and execution
//!
//! Every transform is a pure function that returns a new table.
//!
//! # Example
//!
//! ```
//! use composable_taxa::prelude::*;
//!
//! let table = TaxonTable::from_rows(
//!     &["k__k1;p__p1", "k__k1;p__p1;c__c1", "k__k1;p__p2;c__c2"],
//!     &[[4.0, 1.0], [3.0, 1.0], [1.0, 3.0]],
//! ).unwrap();
//!
//! let phyla = Pipeline::new()
//!     .terminal()
//!     .by_level(1)
//!     .relative_abundance()
//!     .run(&table)
//!     .unwrap();
//!
//! assert_eq!(phyla.taxa(), &["k__k1;p__p1", "k__k1;p__p2"]);
//! assert_eq!(phyla.data(), &[vec![0.75, 0.25], vec![0.25, 0.75]]);
//! ```

pub mod aggregate;
pub mod data;
pub mod error;
pub mod filter;
pub mod format;
pub mod normalize;
pub mod pipeline;
pub mod profile;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::aggregate::{taxa_by_level, terminal_taxa};
    pub use crate::data::{normalize_taxon, Rank, RankEntry, TaxonPath, TaxonTable};
    pub use crate::error::{Result, TaxaError};
    pub use crate::filter::{filter_taxa_level, filter_zero_rows, top_rows, TopMetric};
    pub use crate::format::{taxa_remove_unclassified, taxa_shorten_name};
    pub use crate::normalize::{relative_abundance, relative_abundance_table};
    pub use crate::pipeline::{Pipeline, PipelineConfig, PipelineStep};
    pub use crate::profile::{profile_table, TableProfile};
}
