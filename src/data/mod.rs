//! Data structures for taxonomic abundance tables.

mod rank;
mod taxon_path;
mod taxon_table;

pub use rank::{Rank, PREFIX_SEPARATOR, RANK_DELIMITER};
pub use taxon_path::{normalize_taxon, parse_all, RankEntry, TaxonPath};
pub use taxon_table::TaxonTable;

pub(crate) use taxon_table::{add_assign_row, check_rows, column_sums};
