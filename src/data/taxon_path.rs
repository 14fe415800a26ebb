//! Parsing and normalization of rank-prefixed taxon strings.
//!
//! A taxon is serialized as `k__Bacteria;p__Bacteroidetes;...`. Parsing
//! trims incidental whitespace around every delimiter and drops trailing
//! ranks with empty labels, so equivalent inputs always normalize to the
//! same canonical string.

use super::rank::{Rank, PREFIX_SEPARATOR, RANK_DELIMITER};
use crate::error::{Result, TaxaError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single rank of a taxon path (`g__Bacteroides`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankEntry {
    /// Rank named by the prefix letter.
    pub rank: Rank,
    /// Label after the prefix separator. Empty means unclassified.
    pub label: String,
}

impl RankEntry {
    pub fn new(rank: Rank, label: impl Into<String>) -> Self {
        Self {
            rank,
            label: label.into(),
        }
    }

    /// True when the label is empty.
    pub fn is_unclassified(&self) -> bool {
        self.label.is_empty()
    }
}

impl fmt::Display for RankEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.rank.prefix(), PREFIX_SEPARATOR, self.label)
    }
}

/// A normalized taxon: an ordered sequence of rank entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxonPath {
    entries: Vec<RankEntry>,
}

impl TaxonPath {
    /// Create a path from entries, dropping trailing unclassified ranks.
    pub fn new(mut entries: Vec<RankEntry>) -> Self {
        while entries.last().is_some_and(RankEntry::is_unclassified) {
            entries.pop();
        }
        Self { entries }
    }

    /// Parse and normalize a serialized taxon.
    ///
    /// Fails if any segment lacks the `__` separator, uses an unknown
    /// rank prefix, or the path keeps more ranks than there are levels.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for segment in raw.split(RANK_DELIMITER) {
            let segment = segment.trim();
            let (prefix, label) = segment.split_once(PREFIX_SEPARATOR).ok_or_else(|| {
                TaxaError::parse(
                    raw,
                    format!("segment '{}' is missing the '{}' separator", segment, PREFIX_SEPARATOR),
                )
            })?;
            let prefix = prefix.trim();
            let rank = Rank::from_prefix(prefix).ok_or_else(|| {
                TaxaError::parse(raw, format!("unknown rank prefix '{}'", prefix))
            })?;
            entries.push(RankEntry::new(rank, label.trim()));
        }
        let path = Self::new(entries);
        if path.len() > Rank::ALL.len() {
            return Err(TaxaError::parse(
                raw,
                format!("{} ranks exceed the {} taxonomic levels", path.len(), Rank::ALL.len()),
            ));
        }
        Ok(path)
    }

    /// Rank entries in order.
    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    /// Number of retained ranks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if every rank was unclassified.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 0-based position of the last retained rank, or `None` for an empty path.
    pub fn depth(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }

    /// True if the path has an entry at `level`.
    pub fn reaches(&self, level: usize) -> bool {
        level < self.entries.len()
    }

    /// Entry at `level`, if present.
    pub fn get(&self, level: usize) -> Option<&RankEntry> {
        self.entries.get(level)
    }

    /// Deepest retained entry.
    pub fn last(&self) -> Option<&RankEntry> {
        self.entries.last()
    }

    /// Keep ranks `0..=level`. Interior unclassified ranks are kept as-is.
    pub fn truncate(&self, level: usize) -> Self {
        let end = (level + 1).min(self.entries.len());
        Self {
            entries: self.entries[..end].to_vec(),
        }
    }

    /// True if `other` starts with every rank of `self` and is strictly longer.
    pub fn is_strict_prefix_of(&self, other: &TaxonPath) -> bool {
        self.entries.len() < other.entries.len() && other.entries.starts_with(&self.entries)
    }
}

impl fmt::Display for TaxonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", RANK_DELIMITER)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl FromStr for TaxonPath {
    type Err = TaxaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Normalize a serialized taxon to its canonical string.
pub fn normalize_taxon(raw: &str) -> Result<String> {
    Ok(TaxonPath::parse(raw)?.to_string())
}

/// Parse every taxon in a slice, stopping at the first malformed one.
pub fn parse_all<S: AsRef<str>>(taxa: &[S]) -> Result<Vec<TaxonPath>> {
    taxa.iter().map(|t| TaxonPath::parse(t.as_ref())).collect()
}
