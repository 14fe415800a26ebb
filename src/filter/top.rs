//! Selection of the most abundant or most variable taxa.

use crate::data::TaxonTable;
use crate::error::{Result, TaxaError};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Score used to rank taxa in [`top_rows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopMetric {
    /// Mean abundance across samples.
    Average,
    /// Sample variance (n - 1 denominator) across samples.
    Variance,
    /// Maximum abundance in any sample.
    Max,
}

impl TopMetric {
    /// Score a single row.
    pub fn score(&self, row: &[f64]) -> f64 {
        if row.is_empty() {
            return 0.0;
        }
        let n = row.len() as f64;
        match self {
            TopMetric::Average => row.iter().sum::<f64>() / n,
            TopMetric::Variance => {
                if row.len() < 2 {
                    return 0.0;
                }
                let mean = row.iter().sum::<f64>() / n;
                row.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
            }
            TopMetric::Max => row.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// Keep the `max` highest-scoring taxa.
///
/// Selected taxa are returned in their original input order. Ties are
/// broken in favour of the earlier row. If the table has `max` or fewer
/// taxa it is returned unchanged.
pub fn top_rows(table: &TaxonTable, max: usize, metric: TopMetric) -> Result<TaxonTable> {
    if max == 0 {
        return Err(TaxaError::InvalidParameter(
            "max must be at least 1".to_string(),
        ));
    }
    if table.n_taxa() <= max {
        return Ok(table.clone());
    }

    let scores: Vec<f64> = table
        .data()
        .par_iter()
        .map(|row| metric.score(row))
        .collect();

    let mut order: Vec<usize> = (0..scores.len()).collect();
    // stable sort keeps earlier rows first among equal scores
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut keep = vec![false; scores.len()];
    for &idx in order.iter().take(max) {
        keep[idx] = true;
    }

    debug!(
        "Selected top {} of {} taxa by {:?}",
        max,
        table.n_taxa(),
        metric
    );
    Ok(table.retain_mask(&keep))
}
