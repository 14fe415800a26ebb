//! Extraction of terminal taxa (leaves of the implied taxonomy tree).
//!
//! Internal nodes of a profile (e.g. a phylum row alongside its classes)
//! are partial aggregates of their descendants. Keeping only the leaves
//! avoids counting the same reads twice.

use crate::data::{add_assign_row, parse_all, RankEntry, TaxonPath, TaxonTable};
use crate::error::Result;
use indexmap::IndexMap;
use log::debug;
use std::collections::HashMap;

/// Prefix trie over normalized rank entries.
#[derive(Debug)]
struct PrefixTrie {
    nodes: Vec<TrieNode>,
}

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<RankEntry, usize>,
}

impl PrefixTrie {
    fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    fn insert(&mut self, path: &TaxonPath) {
        let mut node = 0;
        for entry in path.entries() {
            node = match self.nodes[node].children.get(entry) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(entry.clone(), child);
                    child
                }
            };
        }
    }

    /// True if some inserted path strictly extends `path`.
    fn has_descendants(&self, path: &TaxonPath) -> bool {
        let mut node = 0;
        for entry in path.entries() {
            match self.nodes[node].children.get(entry) {
                Some(&child) => node = child,
                None => return false,
            }
        }
        !self.nodes[node].children.is_empty()
    }
}

/// Keep only terminal taxa, merging duplicates.
///
/// A taxon is dropped when another taxon in the table strictly extends it
/// after normalization. Surviving taxa keep their first-occurrence order;
/// repeated taxa are merged into the first occurrence with their rows
/// summed elementwise. Output taxa are in canonical normalized form.
///
/// # Example
/// ```
/// use composable_taxa::prelude::*;
///
/// let table = TaxonTable::from_rows(
///     &["k__k1;p__p1", "k__k1;p__p1;c__c1", "k__k2;p__p2"],
///     &[[1.0], [2.0], [3.0]],
/// ).unwrap();
/// let leaves = terminal_taxa(&table).unwrap();
/// assert_eq!(leaves.taxa(), &["k__k1;p__p1;c__c1", "k__k2;p__p2"]);
/// ```
pub fn terminal_taxa(table: &TaxonTable) -> Result<TaxonTable> {
    let paths = parse_all(table.taxa())?;
    let n_samples = table.n_samples();

    let mut trie = PrefixTrie::new();
    for path in &paths {
        trie.insert(path);
    }

    let mut leaves: IndexMap<String, Vec<f64>> = IndexMap::new();
    for (path, row) in paths.iter().zip(table.data()) {
        if trie.has_descendants(path) {
            continue;
        }
        let acc = leaves
            .entry(path.to_string())
            .or_insert_with(|| vec![0.0; n_samples]);
        add_assign_row(acc, row);
    }

    debug!(
        "Kept {} terminal taxa out of {} input taxa",
        leaves.len(),
        table.n_taxa()
    );

    let (taxa, data): (Vec<String>, Vec<Vec<f64>>) = leaves.into_iter().unzip();
    TaxonTable::with_samples(taxa, data, n_samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_taxa() {
        let table = TaxonTable::from_rows(
            &[
                "k__k1;p__p1",
                "k__k1;p__p1;c__c1",
                "k__k2;p__p2",
                "k__k3;p__p3;c__c2;o__o3",
            ],
            &[[1.0], [2.0], [3.0], [4.0]],
        )
        .unwrap();
        let result = terminal_taxa(&table).unwrap();
        assert_eq!(
            result.taxa(),
            &["k__k1;p__p1;c__c1", "k__k2;p__p2", "k__k3;p__p3;c__c2;o__o3"]
        );
        assert_eq!(result.data(), &[vec![2.0], vec![3.0], vec![4.0]]);
    }

    #[test]
    fn test_duplicates_merged_at_first_position() {
        let table = TaxonTable::from_rows(
            &["k__a;p__x", "k__b", "k__a;p__x", "k__c"],
            &[[1.0, 1.0], [2.0, 0.0], [3.0, 5.0], [0.0, 1.0]],
        )
        .unwrap();
        let result = terminal_taxa(&table).unwrap();
        assert_eq!(result.taxa(), &["k__a;p__x", "k__b", "k__c"]);
        assert_eq!(
            result.data(),
            &[vec![4.0, 6.0], vec![2.0, 0.0], vec![0.0, 1.0]]
        );
    }

    #[test]
    fn test_descendant_listed_before_ancestor() {
        let table = TaxonTable::from_rows(&["k__k1;p__p1;c__c1", "k__k1;p__p1", "k__k1"], &[[2.0], [1.0], [7.0]])
            .unwrap();
        let result = terminal_taxa(&table).unwrap();
        assert_eq!(result.taxa(), &["k__k1;p__p1;c__c1"]);
        assert_eq!(result.data(), &[vec![2.0]]);
    }

    #[test]
    fn test_normalization_applied_before_comparison() {
        // "c__" is unclassified, so the first taxon is really the phylum.
        let table = TaxonTable::from_rows(
            &["k__k1; p__p1 ; c__", "k__k1;p__p1;c__c1"],
            &[[1.0], [2.0]],
        )
        .unwrap();
        let result = terminal_taxa(&table).unwrap();
        assert_eq!(result.taxa(), &["k__k1;p__p1;c__c1"]);
    }

    #[test]
    fn test_label_prefix_is_not_rank_prefix() {
        // "p__p1" is not an ancestor of "p__p10".
        let table = TaxonTable::from_rows(&["k__k1;p__p1", "k__k1;p__p10"], &[[1.0], [2.0]]).unwrap();
        let result = terminal_taxa(&table).unwrap();
        assert_eq!(result.taxa(), &["k__k1;p__p1", "k__k1;p__p10"]);
    }

    #[test]
    fn test_empty_table() {
        let result = terminal_taxa(&TaxonTable::empty(3)).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.n_samples(), 3);
    }
}
