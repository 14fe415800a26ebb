//! Pipeline runner for composing and executing taxon table transforms.

use crate::aggregate::{taxa_by_level, terminal_taxa};
use crate::data::TaxonTable;
use crate::error::{Result, TaxaError};
use crate::filter::{filter_taxa_level, filter_zero_rows, top_rows, TopMetric};
use crate::format::taxa_remove_unclassified;
use crate::normalize::relative_abundance_table;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A step in the transform pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PipelineStep {
    // === Names ===
    /// Normalize taxa and drop trailing unclassified ranks.
    RemoveUnclassified,

    // === Aggregation ===
    /// Sum taxa to a rank level.
    ByLevel { level: usize },
    /// Keep only terminal taxa, merging duplicates.
    Terminal,

    // === Filtering ===
    /// Drop taxa that are zero in every sample.
    FilterZeroRows,
    /// Keep taxa classified to a rank level.
    FilterLevel { level: usize, exact: bool },
    /// Keep the highest-scoring taxa.
    TopRows { max: usize, metric: TopMetric },

    // === Normalization ===
    /// Convert to per-sample proportions.
    RelativeAbundance,
}

impl PipelineStep {
    /// Apply this step to a table.
    pub fn apply(&self, table: &TaxonTable) -> Result<TaxonTable> {
        match self {
            PipelineStep::RemoveUnclassified => {
                let taxa = taxa_remove_unclassified(table.taxa())?;
                TaxonTable::with_samples(taxa, table.data().to_vec(), table.n_samples())
            }
            PipelineStep::ByLevel { level } => taxa_by_level(table, *level),
            PipelineStep::Terminal => terminal_taxa(table),
            PipelineStep::FilterZeroRows => Ok(filter_zero_rows(table)),
            PipelineStep::FilterLevel { level, exact } => filter_taxa_level(table, *level, *exact),
            PipelineStep::TopRows { max, metric } => top_rows(table, *max, *metric),
            PipelineStep::RelativeAbundance => relative_abundance_table(table),
        }
    }
}

/// Pipeline configuration for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Name of the pipeline.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Steps to execute.
    pub steps: Vec<PipelineStep>,
}

impl PipelineConfig {
    /// Load from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(TaxaError::from)
    }

    /// Load from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Save to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(TaxaError::from)
    }
}

/// Builder for constructing and running transform pipelines.
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: Vec<PipelineStep>,
    name: String,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            name: "unnamed".to_string(),
        }
    }

    /// Create from a config.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            steps: config.steps.clone(),
            name: config.name.clone(),
        }
    }

    /// Set the pipeline name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Normalize taxa and drop trailing unclassified ranks.
    pub fn remove_unclassified(mut self) -> Self {
        self.steps.push(PipelineStep::RemoveUnclassified);
        self
    }

    /// Sum taxa to a rank level (0 = kingdom, 7 = strain).
    pub fn by_level(mut self, level: usize) -> Self {
        self.steps.push(PipelineStep::ByLevel { level });
        self
    }

    /// Keep only terminal taxa.
    pub fn terminal(mut self) -> Self {
        self.steps.push(PipelineStep::Terminal);
        self
    }

    /// Drop all-zero taxa.
    pub fn filter_zero_rows(mut self) -> Self {
        self.steps.push(PipelineStep::FilterZeroRows);
        self
    }

    /// Keep taxa classified exactly to (or at least to) a level.
    pub fn filter_level(mut self, level: usize, exact: bool) -> Self {
        self.steps.push(PipelineStep::FilterLevel { level, exact });
        self
    }

    /// Keep the `max` highest-scoring taxa.
    pub fn top_rows(mut self, max: usize, metric: TopMetric) -> Self {
        self.steps.push(PipelineStep::TopRows { max, metric });
        self
    }

    /// Convert to relative abundance.
    pub fn relative_abundance(mut self) -> Self {
        self.steps.push(PipelineStep::RelativeAbundance);
        self
    }

    /// Steps in execution order.
    pub fn steps(&self) -> &[PipelineStep] {
        &self.steps
    }

    /// Convert to a serializable config.
    pub fn to_config(&self, description: Option<&str>) -> PipelineConfig {
        PipelineConfig {
            name: self.name.clone(),
            description: description.map(|s| s.to_string()),
            steps: self.steps.clone(),
        }
    }

    /// Run every step in order, returning the final table.
    pub fn run(&self, table: &TaxonTable) -> Result<TaxonTable> {
        if self.steps.is_empty() {
            return Err(TaxaError::Pipeline(format!(
                "Pipeline '{}' has no steps",
                self.name
            )));
        }

        info!(
            "Running pipeline '{}' ({} steps) on {} taxa × {} samples",
            self.name,
            self.steps.len(),
            table.n_taxa(),
            table.n_samples()
        );

        let mut current = table.clone();
        for (i, step) in self.steps.iter().enumerate() {
            current = step.apply(&current).map_err(|e| match e {
                TaxaError::Pipeline(_) => e,
                other => TaxaError::Pipeline(format!("step {} ({:?}) failed: {}", i + 1, step, other)),
            })?;
            debug!("Step {} {:?}: {} taxa remain", i + 1, step, current.n_taxa());
        }

        info!(
            "Pipeline '{}' finished with {} taxa",
            self.name,
            current.n_taxa()
        );
        Ok(current)
    }
}
