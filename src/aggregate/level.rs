//! Aggregation of taxa to a fixed rank level.

use crate::data::{add_assign_row, parse_all, Rank, TaxonTable};
use crate::error::{Result, TaxaError};
use indexmap::IndexMap;
use log::{debug, warn};

/// Sum taxa up to a rank level.
///
/// Each taxon is normalized and truncated to ranks `0..=level`. Taxa whose
/// normalized depth is below `level` have no data at that granularity and
/// are excluded. Rows sharing a truncated taxon are summed elementwise.
/// Output rows follow the order in which each truncated taxon is first seen.
///
/// # Arguments
/// * `table` - Taxon table to aggregate
/// * `level` - Rank level (0 = kingdom, 7 = strain)
///
/// # Example
/// ```
/// use composable_taxa::prelude::*;
///
/// let table = TaxonTable::from_rows(
///     &["k__k1;p__p1;c__c1", "k__k1;p__p1;c__c2", "k__k1;p__p2;c__c3"],
///     &[[1.0, 2.0], [1.0, 2.0], [1.0, 2.0]],
/// ).unwrap();
/// let phyla = taxa_by_level(&table, 1).unwrap();
/// assert_eq!(phyla.taxa(), &["k__k1;p__p1", "k__k1;p__p2"]);
/// assert_eq!(phyla.data(), &[vec![2.0, 4.0], vec![1.0, 2.0]]);
/// ```
pub fn taxa_by_level(table: &TaxonTable, level: usize) -> Result<TaxonTable> {
    let rank = Rank::from_level(level).ok_or_else(|| {
        TaxaError::InvalidParameter(format!(
            "Level {} is out of range (0 to {})",
            level,
            Rank::MAX_LEVEL
        ))
    })?;

    let paths = parse_all(table.taxa())?;
    let n_samples = table.n_samples();

    let mut groups: IndexMap<String, Vec<f64>> = IndexMap::new();
    for (path, row) in paths.iter().zip(table.data()) {
        if !path.reaches(level) {
            continue;
        }
        let key = path.truncate(level).to_string();
        let acc = groups.entry(key).or_insert_with(|| vec![0.0; n_samples]);
        add_assign_row(acc, row);
    }

    if groups.is_empty() && !table.is_empty() {
        warn!(
            "No taxa reach {} level; aggregation produced an empty table",
            rank
        );
    }
    debug!(
        "Aggregated {} taxa into {} {}-level groups",
        table.n_taxa(),
        groups.len(),
        rank
    );

    let (taxa, data): (Vec<String>, Vec<Vec<f64>>) = groups.into_iter().unzip();
    TaxonTable::with_samples(taxa, data, n_samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_table() -> TaxonTable {
        TaxonTable::from_rows(
            &["k__k1;p__p1;c__c1", "k__k1;p__p1;c__c2", "k__k1;p__p2;c__c3"],
            &[[1.0, 2.0], [1.0, 2.0], [1.0, 2.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_phylum_level() {
        let result = taxa_by_level(&create_test_table(), 1).unwrap();
        assert_eq!(result.taxa(), &["k__k1;p__p1", "k__k1;p__p2"]);
        assert_eq!(result.data(), &[vec![2.0, 4.0], vec![1.0, 2.0]]);
    }

    #[test]
    fn test_kingdom_level() {
        let result = taxa_by_level(&create_test_table(), 0).unwrap();
        assert_eq!(result.taxa(), &["k__k1"]);
        assert_eq!(result.data(), &[vec![3.0, 6.0]]);
    }

    #[test]
    fn test_first_seen_order() {
        let table = TaxonTable::from_rows(
            &["k__b;p__x", "k__a;p__y", "k__b;p__z"],
            &[[1.0], [2.0], [4.0]],
        )
        .unwrap();
        let result = taxa_by_level(&table, 0).unwrap();
        assert_eq!(result.taxa(), &["k__b", "k__a"]);
        assert_eq!(result.data(), &[vec![5.0], vec![2.0]]);
    }

    #[test]
    fn test_shallow_taxa_excluded() {
        let table = TaxonTable::from_rows(
            &["k__k1;p__p1", "k__k1;p__p1;c__c2", "k__k1;p__p2;c__c3"],
            &[[1.0, 2.0], [1.0, 2.0], [1.0, 2.0]],
        )
        .unwrap();
        let result = taxa_by_level(&table, 2).unwrap();
        assert_eq!(result.taxa(), &["k__k1;p__p1;c__c2", "k__k1;p__p2;c__c3"]);
        assert_eq!(result.data(), &[vec![1.0, 2.0], vec![1.0, 2.0]]);
    }

    #[test]
    fn test_trailing_unclassified_does_not_count_as_depth() {
        let table = TaxonTable::from_rows(&["k__k1;p__p1;c__", "k__k1;p__p1;c__c1"], &[[5.0], [1.0]])
            .unwrap();
        let result = taxa_by_level(&table, 2).unwrap();
        assert_eq!(result.taxa(), &["k__k1;p__p1;c__c1"]);
        assert_eq!(result.data(), &[vec![1.0]]);
    }

    #[test]
    fn test_whitespace_variants_grouped() {
        let table = TaxonTable::from_rows(&["k__k1 ; p__p1", "k__k1;p__p1 "], &[[1.0], [2.0]]).unwrap();
        let result = taxa_by_level(&table, 1).unwrap();
        assert_eq!(result.taxa(), &["k__k1;p__p1"]);
        assert_eq!(result.data(), &[vec![3.0]]);
    }

    #[test]
    fn test_strain_missing_keeps_sample_count() {
        let table = TaxonTable::from_rows(
            &["k__k1;p__p1;c__c1;o__o1;f__f1;g__g1;s__s1", "k__k1;p__p1;c__c2"],
            &[[1.0, 2.0], [1.0, 2.0]],
        )
        .unwrap();
        let result = taxa_by_level(&table, 7).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.n_samples(), 2);
    }

    #[test]
    fn test_level_out_of_range() {
        let result = taxa_by_level(&create_test_table(), 8);
        assert!(matches!(result, Err(TaxaError::InvalidParameter(_))));
    }

    #[test]
    fn test_malformed_taxon() {
        let table = TaxonTable::from_rows(&["k__k1;p1"], &[[1.0]]).unwrap();
        assert!(matches!(taxa_by_level(&table, 0), Err(TaxaError::Parse { .. })));
    }
}
