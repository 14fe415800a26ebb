//! Taxon table: taxa paired row-by-row with per-sample abundances.

use crate::error::{Result, TaxaError};
use serde::{Deserialize, Serialize};

/// A dense abundance table keyed by taxon strings.
///
/// Rows represent taxa, columns represent samples. Row `i` of `data`
/// belongs to `taxa[i]`; every row has exactly `n_samples` values.
/// Tables are immutable values: transforms build a new table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTaxonTable")]
pub struct TaxonTable {
    /// Taxon strings (row names), as given by the caller or produced by a transform.
    taxa: Vec<String>,
    /// Abundance rows (taxa × samples).
    data: Vec<Vec<f64>>,
    /// Number of samples (columns).
    n_samples: usize,
}

/// Unchecked serialized form; converted through [`TaxonTable::with_samples`].
#[derive(Deserialize)]
struct RawTaxonTable {
    taxa: Vec<String>,
    data: Vec<Vec<f64>>,
    n_samples: usize,
}

impl TryFrom<RawTaxonTable> for TaxonTable {
    type Error = TaxaError;

    fn try_from(raw: RawTaxonTable) -> Result<Self> {
        Self::with_samples(raw.taxa, raw.data, raw.n_samples)
    }
}

impl TaxonTable {
    /// Create a table, checking that taxa and rows line up.
    ///
    /// The sample count is taken from the first row; an empty table has
    /// zero samples. Use [`TaxonTable::with_samples`] to keep a sample
    /// count for a table without rows.
    pub fn new(taxa: Vec<String>, data: Vec<Vec<f64>>) -> Result<Self> {
        let n_samples = data.first().map(Vec::len).unwrap_or(0);
        Self::with_samples(taxa, data, n_samples)
    }

    /// Create a table with an explicit sample count.
    pub fn with_samples(taxa: Vec<String>, data: Vec<Vec<f64>>, n_samples: usize) -> Result<Self> {
        if taxa.len() != data.len() {
            return Err(TaxaError::DimensionMismatch {
                expected: taxa.len(),
                actual: data.len(),
            });
        }
        check_rows(&data, n_samples)?;
        Ok(Self {
            taxa,
            data,
            n_samples,
        })
    }

    /// Convenience constructor from string slices and row slices.
    pub fn from_rows<S: AsRef<str>, R: AsRef<[f64]>>(taxa: &[S], data: &[R]) -> Result<Self> {
        Self::new(
            taxa.iter().map(|t| t.as_ref().to_string()).collect(),
            data.iter().map(|r| r.as_ref().to_vec()).collect(),
        )
    }

    /// An empty table with a fixed number of samples.
    pub fn empty(n_samples: usize) -> Self {
        Self {
            taxa: Vec::new(),
            data: Vec::new(),
            n_samples,
        }
    }

    /// Number of taxa (rows).
    #[inline]
    pub fn n_taxa(&self) -> usize {
        self.taxa.len()
    }

    /// Number of samples (columns).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// True if the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.taxa.is_empty()
    }

    /// Taxon strings.
    #[inline]
    pub fn taxa(&self) -> &[String] {
        &self.taxa
    }

    /// Abundance rows.
    #[inline]
    pub fn data(&self) -> &[Vec<f64>] {
        &self.data
    }

    /// Abundances for a single taxon.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.data.get(index).map(Vec::as_slice)
    }

    /// Iterate over `(taxon, row)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> + '_ {
        self.taxa
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().map(Vec::as_slice))
    }

    /// Total abundance per taxon.
    pub fn row_sums(&self) -> Vec<f64> {
        self.data.iter().map(|row| row.iter().sum()).collect()
    }

    /// Total abundance per sample.
    pub fn col_sums(&self) -> Vec<f64> {
        column_sums(&self.data, self.n_samples)
    }

    /// Keep only the rows at `indices`, in the given order.
    pub fn subset(&self, indices: &[usize]) -> Result<Self> {
        let mut taxa = Vec::with_capacity(indices.len());
        let mut data = Vec::with_capacity(indices.len());
        for &idx in indices {
            if idx >= self.n_taxa() {
                return Err(TaxaError::InvalidParameter(format!(
                    "Taxon index {} out of bounds",
                    idx
                )));
            }
            taxa.push(self.taxa[idx].clone());
            data.push(self.data[idx].clone());
        }
        Ok(Self {
            taxa,
            data,
            n_samples: self.n_samples,
        })
    }

    /// Keep the rows whose mask entry is true, preserving order.
    pub fn retain_mask(&self, keep: &[bool]) -> Self {
        let (taxa, data) = self
            .taxa
            .iter()
            .zip(&self.data)
            .zip(keep)
            .filter(|(_, k)| **k)
            .map(|((taxon, row), _)| (taxon.clone(), row.clone()))
            .unzip();
        Self {
            taxa,
            data,
            n_samples: self.n_samples,
        }
    }

    /// Replace the data rows, keeping the taxa.
    pub fn with_data(&self, data: Vec<Vec<f64>>) -> Result<Self> {
        let n_samples = data.first().map(Vec::len).unwrap_or(self.n_samples);
        Self::with_samples(self.taxa.clone(), data, n_samples)
    }

    /// Split into taxa and data.
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<f64>>) {
        (self.taxa, self.data)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(TaxaError::from)
    }

    /// Load from a JSON string. The shape is checked while deserializing.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(TaxaError::from)
    }
}

/// Check that every row has `n_samples` values.
pub(crate) fn check_rows(data: &[Vec<f64>], n_samples: usize) -> Result<()> {
    for (row, values) in data.iter().enumerate() {
        if values.len() != n_samples {
            return Err(TaxaError::RaggedRow {
                row,
                expected: n_samples,
                actual: values.len(),
            });
        }
    }
    Ok(())
}

/// Column sums of a rectangular matrix.
pub(crate) fn column_sums(data: &[Vec<f64>], n_samples: usize) -> Vec<f64> {
    let mut sums = vec![0.0; n_samples];
    for row in data {
        for (col, &val) in row.iter().enumerate() {
            sums[col] += val;
        }
    }
    sums
}

/// Add `row` into `acc` elementwise.
pub(crate) fn add_assign_row(acc: &mut [f64], row: &[f64]) {
    for (a, &v) in acc.iter_mut().zip(row) {
        *a += v;
    }
}
