//! Relative abundance (per-sample total sum scaling).
//!
//! Each sample column is divided by its total so that the column sums to
//! 1. A column whose total is zero cannot be scaled and is reported as an
//! error rather than silently zero-filled.

use crate::data::{check_rows, column_sums, TaxonTable};
use crate::error::{Result, TaxaError};
use log::debug;
use rayon::prelude::*;

/// Convert abundances to per-sample proportions.
///
/// For sample `j`: `out[i][j] = data[i][j] / sum_i(data[i][j])`.
///
/// # Errors
/// * `RaggedRow` if rows differ in length
/// * `DegenerateColumn` if any sample sums to zero
///
/// # Example
/// ```
/// use composable_taxa::prelude::*;
///
/// let relab = relative_abundance(&[vec![1.0, 3.0], vec![3.0, 1.0]]).unwrap();
/// assert_eq!(relab, vec![vec![0.25, 0.75], vec![0.75, 0.25]]);
/// ```
pub fn relative_abundance(data: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    let n_samples = match data.first() {
        Some(row) => row.len(),
        None => return Ok(Vec::new()),
    };
    check_rows(data, n_samples)?;

    let totals = column_sums(data, n_samples);
    if let Some(column) = totals.iter().position(|&total| total == 0.0) {
        return Err(TaxaError::DegenerateColumn { column });
    }

    debug!(
        "Scaling {} taxa across {} samples to relative abundance",
        data.len(),
        n_samples
    );

    Ok(data
        .par_iter()
        .map(|row| {
            row.iter()
                .zip(&totals)
                .map(|(&value, &total)| value / total)
                .collect::<Vec<f64>>()
        })
        .collect())
}

/// Apply [`relative_abundance`] to a taxon table, keeping its taxa.
pub fn relative_abundance_table(table: &TaxonTable) -> Result<TaxonTable> {
    table.with_data(relative_abundance(table.data())?)
}
