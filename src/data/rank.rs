//! Taxonomic ranks and their single-letter prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between a rank prefix and its label (`g__Bacteroides`).
pub const PREFIX_SEPARATOR: &str = "__";

/// Separator between ranks in a serialized taxon.
pub const RANK_DELIMITER: char = ';';

/// A level of the taxonomic hierarchy.
///
/// Ranks are ordered from kingdom (index 0) to strain (index 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Kingdom,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
    Species,
    Strain,
}

impl Rank {
    /// All ranks, kingdom first.
    pub const ALL: [Rank; 8] = [
        Rank::Kingdom,
        Rank::Phylum,
        Rank::Class,
        Rank::Order,
        Rank::Family,
        Rank::Genus,
        Rank::Species,
        Rank::Strain,
    ];

    /// Deepest valid level index.
    pub const MAX_LEVEL: usize = 7;

    /// Look up a rank by its prefix letter.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "k" => Some(Rank::Kingdom),
            "p" => Some(Rank::Phylum),
            "c" => Some(Rank::Class),
            "o" => Some(Rank::Order),
            "f" => Some(Rank::Family),
            "g" => Some(Rank::Genus),
            "s" => Some(Rank::Species),
            "t" => Some(Rank::Strain),
            _ => None,
        }
    }

    /// Look up a rank by its level index (0 = kingdom).
    pub fn from_level(level: usize) -> Option<Self> {
        Self::ALL.get(level).copied()
    }

    /// Prefix letter used in serialized taxa.
    pub fn prefix(&self) -> &'static str {
        match self {
            Rank::Kingdom => "k",
            Rank::Phylum => "p",
            Rank::Class => "c",
            Rank::Order => "o",
            Rank::Family => "f",
            Rank::Genus => "g",
            Rank::Species => "s",
            Rank::Strain => "t",
        }
    }

    /// Level index (0 = kingdom, 7 = strain).
    pub fn level(&self) -> usize {
        *self as usize
    }

    /// Human-readable rank name.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Kingdom => "kingdom",
            Rank::Phylum => "phylum",
            Rank::Class => "class",
            Rank::Order => "order",
            Rank::Family => "family",
            Rank::Genus => "genus",
            Rank::Species => "species",
            Rank::Strain => "strain",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
