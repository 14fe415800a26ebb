//! Removal of taxa with no abundance in any sample.

use crate::data::TaxonTable;
use log::debug;
use rayon::prelude::*;

/// Drop taxa whose row is zero in every sample.
///
/// A row with any non-zero value, however small, is kept. Surviving taxa
/// keep their input order.
pub fn filter_zero_rows(table: &TaxonTable) -> TaxonTable {
    let keep: Vec<bool> = table
        .data()
        .par_iter()
        .map(|row| row.iter().any(|&v| v != 0.0))
        .collect();

    let filtered = table.retain_mask(&keep);
    debug!(
        "Removed {} all-zero taxa, {} remain",
        table.n_taxa() - filtered.n_taxa(),
        filtered.n_taxa()
    );
    filtered
}
