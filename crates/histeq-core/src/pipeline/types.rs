use serde::Serialize;

use crate::frame::GrayFrame;
use crate::histogram::FrequencyTable;
use crate::mapping::IntensityMap;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Reading,
    Converting,
    Analyzing,
    Mapping,
    Remapping,
    Stretching,
    Reanalyzing,
    Writing,
}

impl PipelineStage {
    /// Fraction of the pipeline completed once this stage starts.
    pub fn progress(self) -> f32 {
        let index = match self {
            Self::Reading => 0,
            Self::Converting => 1,
            Self::Analyzing => 2,
            Self::Mapping => 3,
            Self::Remapping => 4,
            Self::Stretching => 5,
            Self::Reanalyzing => 6,
            Self::Writing => 7,
        };
        index as f32 / 8.0
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reading => write!(f, "Reading image"),
            Self::Converting => write!(f, "Converting to luminance"),
            Self::Analyzing => write!(f, "Analyzing histogram"),
            Self::Mapping => write!(f, "Building intensity map"),
            Self::Remapping => write!(f, "Remapping pixels"),
            Self::Stretching => write!(f, "Stretching levels"),
            Self::Reanalyzing => write!(f, "Analyzing result"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Before/after histograms and the transfer function of one equalization.
#[derive(Clone, Debug, Serialize)]
pub struct EqualizeReport {
    pub before: FrequencyTable,
    pub after: FrequencyTable,
    pub map: IntensityMap,
}

/// Result of a file-to-file pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub frame: GrayFrame,
    pub report: EqualizeReport,
    /// Whether the source was color and went through luminance conversion.
    pub converted: bool,
}

/// Thread-safe progress reporting for the pipeline.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started.
    fn begin_stage(&self, _stage: PipelineStage) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used by the in-memory entry points.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// Adapts a `(stage, fraction)` callback to `ProgressReporter`.
pub(super) struct CallbackReporter<F>(pub F);

impl<F> ProgressReporter for CallbackReporter<F>
where
    F: Fn(PipelineStage, f32) + Send + Sync,
{
    fn begin_stage(&self, stage: PipelineStage) {
        (self.0)(stage, stage.progress());
    }
}
