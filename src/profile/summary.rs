//! Summary profile of a taxon table.

use crate::data::{parse_all, Rank, TaxonTable};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Overview of a taxon table's shape and classification depth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableProfile {
    /// Number of taxa (rows).
    pub n_taxa: usize,
    /// Number of samples (columns).
    pub n_samples: usize,
    /// Taxa that are zero in every sample.
    pub n_zero_rows: usize,
    /// Taxa with no classified rank at all.
    pub n_unclassified: usize,
    /// Taxa whose deepest rank is each level, kingdom first.
    pub taxa_per_rank: [usize; 8],
    /// Total abundance per sample.
    pub sample_totals: Vec<f64>,
}

impl TableProfile {
    /// Number of taxa classified to exactly `rank`.
    pub fn taxa_at(&self, rank: Rank) -> usize {
        self.taxa_per_rank[rank.level()]
    }

    /// Deepest rank reached by any taxon.
    pub fn deepest_rank(&self) -> Option<Rank> {
        self.taxa_per_rank
            .iter()
            .rposition(|&n| n > 0)
            .and_then(Rank::from_level)
    }
}

impl std::fmt::Display for TableProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Taxon Table Profile")?;
        writeln!(f, "  Taxa:          {}", self.n_taxa)?;
        writeln!(f, "  Samples:       {}", self.n_samples)?;
        writeln!(f, "  All-zero taxa: {}", self.n_zero_rows)?;
        writeln!(f, "  Unclassified:  {}", self.n_unclassified)?;
        for rank in Rank::ALL {
            let n = self.taxa_at(rank);
            if n > 0 {
                writeln!(f, "  {:<8} {}", rank.name(), n)?;
            }
        }
        Ok(())
    }
}

/// Profile a taxon table.
pub fn profile_table(table: &TaxonTable) -> Result<TableProfile> {
    let mut taxa_per_rank = [0usize; 8];
    let mut n_unclassified = 0;
    for path in parse_all(table.taxa())? {
        match path.depth() {
            Some(depth) => taxa_per_rank[depth] += 1,
            None => n_unclassified += 1,
        }
    }

    let n_zero_rows = table
        .data()
        .iter()
        .filter(|row| row.iter().all(|&v| v == 0.0))
        .count();

    Ok(TableProfile {
        n_taxa: table.n_taxa(),
        n_samples: table.n_samples(),
        n_zero_rows,
        n_unclassified,
        taxa_per_rank,
        sample_totals: table.col_sums(),
    })
}
