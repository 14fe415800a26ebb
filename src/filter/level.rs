//! Filtering taxa by the depth they are classified to.

use crate::data::{parse_all, Rank, TaxonTable};
use crate::error::{Result, TaxaError};
use log::debug;

/// Keep taxa classified to a given rank level.
///
/// With `exact = true` only taxa whose normalized depth equals `level` are
/// kept (e.g. species rows of a MetaPhlAn profile that also lists genera).
/// With `exact = false` every taxon reaching at least `level` is kept.
/// Original taxon strings and input order are preserved.
pub fn filter_taxa_level(table: &TaxonTable, level: usize, exact: bool) -> Result<TaxonTable> {
    let rank = Rank::from_level(level).ok_or_else(|| {
        TaxaError::InvalidParameter(format!(
            "Level {} is out of range (0 to {})",
            level,
            Rank::MAX_LEVEL
        ))
    })?;

    let keep: Vec<bool> = parse_all(table.taxa())?
        .iter()
        .map(|path| match path.depth() {
            Some(depth) if exact => depth == level,
            Some(depth) => depth >= level,
            None => false,
        })
        .collect();

    let filtered = table.retain_mask(&keep);
    debug!(
        "Kept {} of {} taxa at {} level (exact = {})",
        filtered.n_taxa(),
        table.n_taxa(),
        rank,
        exact
    );
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_table() -> TaxonTable {
        TaxonTable::from_rows(
            &[
                "k__k1;p__p1;c__c1;o__o1;f__f1;g__g1",
                "k__k1;p__p1;c__c1;o__o1;f__f1;g__g1;s__s1",
                "k__k1;p__p1;c__c1;o__o1;f__f1;g__g1;s__s1;t__t1",
                "k__k1;p__p1;c__c1;o__o1;f__f1;g__g2;s__ ",
            ],
            &[[1.0], [2.0], [3.0], [4.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_exact_species() {
        let result = filter_taxa_level(&create_test_table(), 6, true).unwrap();
        assert_eq!(result.taxa(), &["k__k1;p__p1;c__c1;o__o1;f__f1;g__g1;s__s1"]);
        assert_eq!(result.data(), &[vec![2.0]]);
    }

    #[test]
    fn test_at_least_species() {
        let result = filter_taxa_level(&create_test_table(), 6, false).unwrap();
        assert_eq!(result.n_taxa(), 2);
        assert_eq!(result.data(), &[vec![2.0], vec![3.0]]);
    }

    #[test]
    fn test_unclassified_species_counts_as_genus() {
        let result = filter_taxa_level(&create_test_table(), 5, true).unwrap();
        assert_eq!(result.data(), &[vec![1.0], vec![4.0]]);
        // original strings are kept
        assert_eq!(result.taxa()[1], "k__k1;p__p1;c__c1;o__o1;f__f1;g__g2;s__ ");
    }

    #[test]
    fn test_invalid_level() {
        assert!(filter_taxa_level(&create_test_table(), 9, true).is_err());
    }
}
