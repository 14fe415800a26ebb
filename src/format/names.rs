//! Canonical and shortened taxon names.

use crate::data::{parse_all, TaxonPath};
use crate::error::{Result, TaxaError};

/// Normalize taxa, dropping trailing unclassified ranks.
///
/// Whitespace around delimiters is removed and empty trailing ranks such
/// as `c__` are dropped, so `"k__k1;p__p1 ; c__ "` becomes `"k__k1;p__p1"`.
/// Applying this twice gives the same result as applying it once.
pub fn taxa_remove_unclassified<S: AsRef<str>>(taxa: &[S]) -> Result<Vec<String>> {
    Ok(parse_all(taxa)?.iter().map(TaxonPath::to_string).collect())
}

/// Extract a single rank's name from each taxon.
///
/// Returns `prefix__label` for the rank at `level`, or just `label` when
/// `remove_identifier` is set.
///
/// # Errors
/// `RankDepth` if a taxon is not classified down to `level`. Filter the
/// taxa first (e.g. with `filter_taxa_level`) when mixing depths.
///
/// # Example
/// ```
/// use composable_taxa::prelude::*;
///
/// let taxa = ["k__k1;p__p1;c__c1", "k__k1;p__p1"];
/// assert_eq!(taxa_shorten_name(&taxa, 1, false).unwrap(), vec!["p__p1", "p__p1"]);
/// assert_eq!(taxa_shorten_name(&taxa, 1, true).unwrap(), vec!["p1", "p1"]);
/// ```
pub fn taxa_shorten_name<S: AsRef<str>>(
    taxa: &[S],
    level: usize,
    remove_identifier: bool,
) -> Result<Vec<String>> {
    taxa.iter()
        .map(|raw| -> Result<String> {
            let raw = raw.as_ref();
            let path = TaxonPath::parse(raw)?;
            let entry = path.get(level).ok_or_else(|| TaxaError::RankDepth {
                taxon: raw.to_string(),
                level,
                depth: path.depth(),
            })?;
            Ok(if remove_identifier {
                entry.label.clone()
            } else {
                entry.to_string()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_unclassified() {
        let taxa = [
            "k__k1;p__p1;c__",
            "k__k1;p__p1;c__c1;o__o1;f__f1;g__g1;s__s1",
            "k__k1;p__p1;c__c1;o__o1;f__f1;g__g1;s__",
        ];
        assert_eq!(
            taxa_remove_unclassified(&taxa).unwrap(),
            vec![
                "k__k1;p__p1",
                "k__k1;p__p1;c__c1;o__o1;f__f1;g__g1;s__s1",
                "k__k1;p__p1;c__c1;o__o1;f__f1;g__g1",
            ]
        );
    }

    #[test]
    fn test_remove_unclassified_spaces() {
        let taxa = [
            "k__k1;p__p1 ; c__ ",
            "k__k1;p__p1;c__c1 ; o__o1 ;f__f1;g__g1 ; s__s1 ",
            "k__k1;p__p1;c__c1;o__o1;f__f1;g__g1;s__",
        ];
        assert_eq!(
            taxa_remove_unclassified(&taxa).unwrap(),
            vec![
                "k__k1;p__p1",
                "k__k1;p__p1;c__c1;o__o1;f__f1;g__g1;s__s1",
                "k__k1;p__p1;c__c1;o__o1;f__f1;g__g1",
            ]
        );
    }

    #[test]
    fn test_remove_unclassified_idempotent() {
        let once = taxa_remove_unclassified(&["k__a ;p__b;c__;o__"]).unwrap();
        let twice = taxa_remove_unclassified(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_shorten_name() {
        let taxa = ["k__k1;p__p1;c__c1", "k__k1;p__p1;c__c1;o__o1", "k__k1;p__p1"];
        assert_eq!(
            taxa_shorten_name(&taxa, 1, false).unwrap(),
            vec!["p__p1", "p__p1", "p__p1"]
        );
    }

    #[test]
    fn test_shorten_name_remove_identifier() {
        let taxa = ["k__k1;p__p1;c__c1", "k__k1;p__p1;c__c1;o__o1", "k__k1;p__p1"];
        assert_eq!(
            taxa_shorten_name(&taxa, 1, true).unwrap(),
            vec!["p1", "p1", "p1"]
        );
    }

    #[test]
    fn test_shorten_name_trims_whitespace() {
        let taxa = [" k__k1 ; p __ p1 "];
        assert_eq!(taxa_shorten_name(&taxa, 1, false).unwrap(), vec!["p__p1"]);
    }

    #[test]
    fn test_shorten_name_too_shallow() {
        let taxa = ["k__k1;p__p1;c__c1", "k__k1;p__p1;c__"];
        let err = taxa_shorten_name(&taxa, 2, false).unwrap_err();
        match err {
            TaxaError::RankDepth {
                taxon,
                level,
                depth,
            } => {
                assert_eq!(taxon, "k__k1;p__p1;c__");
                assert_eq!(level, 2);
                assert_eq!(depth, Some(1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_shorten_name_unclassified_has_no_depth() {
        let err = taxa_shorten_name(&["k__;p__"], 0, false).unwrap_err();
        assert!(matches!(err, TaxaError::RankDepth { depth: None, level: 0, .. }));
        assert!(err.to_string().contains("depth: None"));
    }
}
