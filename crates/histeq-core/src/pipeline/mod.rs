pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{equalize_color, equalize_in_place, run_pipeline, run_pipeline_reported};
pub use types::{EqualizeReport, PipelineOutput, PipelineStage, ProgressReporter};
