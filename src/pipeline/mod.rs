//! Pipeline composition and execution for taxon table transforms.

mod runner;

pub use runner::{Pipeline, PipelineConfig, PipelineStep};
